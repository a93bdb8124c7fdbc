//!
//! The fetch error.
//!

use std::path::PathBuf;

///
/// The fetch error.
///
/// Transient transport errors are retried and never end up here.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The cache directory cannot be created.
    #[error("Creating cache directory {path:?}: {error}")]
    CreatingDirectory {
        /// The underlying IO error.
        error: std::io::Error,
        /// The directory path.
        path: PathBuf,
    },
    /// The downloaded content cannot be stored.
    #[error("Writing cache file {path:?}: {error}")]
    Writing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The file path.
        path: PathBuf,
    },
    /// The server refused the resource.
    #[error("Fetching `{url}` rejected with HTTP status {status}")]
    Rejected {
        /// The resource URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },
}
