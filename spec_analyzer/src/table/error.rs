//!
//! The tabular file error.
//!

use std::path::PathBuf;

///
/// The tabular file error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the table.
    #[error("Reading table {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The table path.
        path: PathBuf,
    },
    /// Error writing the table.
    #[error("Writing table {path:?}: {error}")]
    Writing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The table path.
        path: PathBuf,
    },
    /// The header row does not name the expected fields.
    #[error("Table {path:?} has header `{found}`, expected `{expected}`")]
    Header {
        /// The table path.
        path: PathBuf,
        /// The expected header.
        expected: String,
        /// The header found.
        found: String,
    },
    /// A record cannot be decoded.
    #[error("Table {path:?} record {record}: {reason}")]
    Record {
        /// The table path.
        path: PathBuf,
        /// The record number, the header being 0.
        record: usize,
        /// The decoding failure.
        reason: String,
    },
}
