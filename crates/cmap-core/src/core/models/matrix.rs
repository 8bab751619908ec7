use nalgebra::DMatrix;
use thiserror::Error;

/// The flat value buffer handed to [`DistanceMatrix::from_flat`] did not have a
/// perfect-square length and therefore cannot describe a square matrix.
///
/// Seeing this error means the selection or grouping stage upstream produced an
/// inconsistent buffer, not that the input file was malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("flat distance buffer of length {len} is not a perfect square")]
pub struct MatrixShapeError {
    /// The offending buffer length.
    pub len: usize,
}

/// A square, symmetric matrix of rounded pairwise distances for one chain.
///
/// Entry (i, j) is the Euclidean distance between the i-th and j-th selected
/// atom of the chain in file order, rounded to two decimals; the diagonal is
/// exactly 0.0. The only way to construct one is [`DistanceMatrix::from_flat`],
/// which enforces the squareness invariant on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    matrix: DMatrix<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from a flat row-major buffer of length n².
    ///
    /// # Errors
    ///
    /// Returns [`MatrixShapeError`] if the buffer length is not a perfect square.
    pub fn from_flat(values: Vec<f64>) -> Result<Self, MatrixShapeError> {
        let n = (values.len() as f64).sqrt().round() as usize;
        if n * n != values.len() {
            return Err(MatrixShapeError { len: values.len() });
        }
        Ok(Self {
            matrix: DMatrix::from_row_slice(n, n, &values),
        })
    }

    /// The number of rows (equally, columns) of the matrix.
    pub fn dim(&self) -> usize {
        self.matrix.nrows()
    }

    /// The entry at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.matrix[(i, j)]
    }

    /// The underlying nalgebra matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }
}
