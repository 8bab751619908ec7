use crate::core::models::matrix::MatrixShapeError;
use thiserror::Error;

/// Defines errors that can occur while computing distance matrices.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A selected atom carries a coordinate that is not a valid real number.
    #[error("invalid {axis} coordinate '{value}' for an alpha-carbon in chain '{chain_id}'")]
    CoordinateParse {
        /// The coordinate axis that failed to parse (`x`, `y`, or `z`).
        axis: &'static str,
        /// The raw field value as it appeared in the input.
        value: String,
        /// The chain the offending atom belongs to.
        chain_id: String,
    },

    /// A chain's flat distance buffer could not be shaped into a square matrix.
    #[error("cannot shape distance matrix for chain '{chain_id}'")]
    MatrixShape {
        /// The chain whose matrix failed to materialize.
        chain_id: String,
        /// The underlying shape violation.
        #[source]
        source: MatrixShapeError,
    },
}
