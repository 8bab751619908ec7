use crate::core::models::matrix::DistanceMatrix;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

const NPY_MAGIC: &[u8] = b"\x93NUMPY";
const NPY_VERSION: [u8; 2] = [0x01, 0x00];
const NPY_HEADER_ALIGN: usize = 64;

/// Writer for the NPY array format (version 1.0).
///
/// The output is byte-identical to what `numpy.save` produces for a C-order
/// two-dimensional `float64` array, so the files can be loaded by any
/// NumPy-compatible reader without conversion.
pub struct NpyFile;

impl NpyFile {
    /// Serializes a distance matrix to a writer.
    ///
    /// # Arguments
    ///
    /// * `matrix` - The matrix to serialize.
    /// * `writer` - The writer to output to.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to(matrix: &DistanceMatrix, writer: &mut impl Write) -> io::Result<()> {
        let n = matrix.dim();
        writer.write_all(&header_bytes(n))?;
        for i in 0..n {
            for j in 0..n {
                writer.write_all(&matrix.get(i, j).to_le_bytes())?;
            }
        }
        Ok(())
    }

    /// Serializes a distance matrix to a file path.
    ///
    /// The file handle is scoped to this call: the buffered writer is flushed
    /// explicitly so write failures surface here rather than being lost on drop.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    pub fn write_to_path<P: AsRef<Path>>(matrix: &DistanceMatrix, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(matrix, &mut writer)?;
        writer.flush()
    }
}

// Preamble layout: magic, version, little-endian u16 header length, then the
// header dict padded with spaces and closed by '\n' so the payload starts on a
// 64-byte boundary. When the unpadded header is already aligned, a further 64
// bytes of padding go in, matching numpy's own algorithm.
fn header_bytes(n: usize) -> Vec<u8> {
    let dict = format!("{{'descr': '<f8', 'fortran_order': False, 'shape': ({}, {}), }}", n, n);
    let unpadded = NPY_MAGIC.len() + NPY_VERSION.len() + 2 + dict.len() + 1;
    let padding = NPY_HEADER_ALIGN - unpadded % NPY_HEADER_ALIGN;
    let header_len = (dict.len() + padding + 1) as u16;

    let mut out = Vec::with_capacity(unpadded + padding);
    out.extend_from_slice(NPY_MAGIC);
    out.extend_from_slice(&NPY_VERSION);
    out.extend_from_slice(&header_len.to_le_bytes());
    out.extend_from_slice(dict.as_bytes());
    out.resize(out.len() + padding, b' ');
    out.push(b'\n');
    out
}

/// Builds the output path for one chain's matrix file.
///
/// The file name is `<stem>_<chain_id>_matrix.npy`, where `<stem>` is the
/// input's file name truncated at its first `.` (`file.cif` and `file.tar.gz`
/// both yield `file`), joined onto the output directory.
pub fn matrix_output_path(input_path: &Path, output_dir: &Path, chain_id: &str) -> PathBuf {
    let file_name = input_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("");
    let stem = file_name.split('.').next().unwrap_or("");
    output_dir.join(format!("{}_{}_matrix.npy", stem, chain_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_bytes(matrix: &DistanceMatrix) -> Vec<u8> {
        let mut buffer = Vec::new();
        NpyFile::write_to(matrix, &mut buffer).unwrap();
        buffer
    }

    #[test]
    fn single_digit_shapes_use_the_canonical_128_byte_preamble() {
        let matrix = DistanceMatrix::from_flat(vec![0.0]).unwrap();
        let bytes = write_bytes(&matrix);

        assert_eq!(bytes.len(), 128 + 8);
        assert_eq!(&bytes[..6], b"\x93NUMPY");
        assert_eq!(bytes[6], 0x01);
        assert_eq!(bytes[7], 0x00);
        assert_eq!(u16::from_le_bytes([bytes[8], bytes[9]]), 118);

        let header = std::str::from_utf8(&bytes[10..128]).unwrap();
        assert!(header.starts_with("{'descr': '<f8', 'fortran_order': False, 'shape': (1, 1), }"));
        assert!(header.ends_with('\n'));
        assert!(header[60..117].chars().all(|c| c == ' '));
    }

    #[test]
    fn payload_is_row_major_little_endian_f64() {
        let matrix = DistanceMatrix::from_flat(vec![0.0, 1.5, 1.5, 0.0]).unwrap();
        let bytes = write_bytes(&matrix);

        assert_eq!(bytes.len(), 128 + 4 * 8);
        let decoded: Vec<f64> = bytes[128..]
            .chunks(8)
            .map(|chunk| {
                let mut raw = [0u8; 8];
                raw.copy_from_slice(chunk);
                f64::from_le_bytes(raw)
            })
            .collect();
        assert_eq!(decoded, vec![0.0, 1.5, 1.5, 0.0]);
        // 1.5 is 0x3FF8000000000000; spot-check the endianness on disk.
        assert_eq!(&bytes[136..144], &[0, 0, 0, 0, 0, 0, 0xf8, 0x3f]);
    }

    #[test]
    fn header_stays_aligned_for_wider_shapes() {
        let matrix = DistanceMatrix::from_flat(vec![0.0; 100]).unwrap();
        let bytes = write_bytes(&matrix);

        let header_len = u16::from_le_bytes([bytes[8], bytes[9]]) as usize;
        assert_eq!((10 + header_len) % 64, 0);
        assert_eq!(bytes.len(), 10 + header_len + 100 * 8);
        let header = std::str::from_utf8(&bytes[10..10 + header_len]).unwrap();
        assert!(header.contains("'shape': (10, 10)"));
    }

    #[test]
    fn write_to_path_creates_a_loadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chain.npy");
        let matrix = DistanceMatrix::from_flat(vec![0.0, 3.82, 3.82, 0.0]).unwrap();

        NpyFile::write_to_path(&matrix, &path).unwrap();

        let on_disk = std::fs::read(&path).unwrap();
        assert_eq!(on_disk, write_bytes(&matrix));
    }

    #[test]
    fn write_to_path_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("chain.npy");
        let matrix = DistanceMatrix::from_flat(vec![0.0]).unwrap();

        assert!(NpyFile::write_to_path(&matrix, &path).is_err());
    }

    #[test]
    fn output_path_joins_stem_chain_and_suffix() {
        let path = matrix_output_path(
            Path::new("/input/path/file.cif"),
            Path::new("/output/path"),
            "A",
        );
        assert_eq!(path, Path::new("/output/path/file_A_matrix.npy"));
    }

    #[test]
    fn output_path_ignores_the_original_extension() {
        let path = matrix_output_path(Path::new("file.foo"), Path::new("out"), "B");
        assert_eq!(path, Path::new("out/file_B_matrix.npy"));
    }

    #[test]
    fn output_path_truncates_at_the_first_dot() {
        let path = matrix_output_path(Path::new("/data/file.cif.gz"), Path::new("out"), "C");
        assert_eq!(path, Path::new("out/file_C_matrix.npy"));

        let no_ext = matrix_output_path(Path::new("/data/file"), Path::new("out"), "A");
        assert_eq!(no_ext, Path::new("out/file_A_matrix.npy"));
    }
}
