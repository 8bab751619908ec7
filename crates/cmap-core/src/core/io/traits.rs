use crate::core::models::atom::AtomSiteRecord;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading structure file formats.
///
/// This trait provides a common API for extracting the atom-site table from a
/// structure file. Implementors handle format-specific parsing; consumers only
/// ever see the resulting stream of typed records.
pub trait StructureFile {
    /// The error type for parsing operations.
    type Error: Error + From<io::Error>;

    /// Reads all atom-site records from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns the atom-site records in file order. A file with no atom-site
    /// table yields an empty vector, which is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is malformed or I/O operations fail.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<AtomSiteRecord>, Self::Error>;

    /// Reads all atom-site records from a file path.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the file to read.
    ///
    /// # Return
    ///
    /// Returns the atom-site records in file order.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<AtomSiteRecord>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
