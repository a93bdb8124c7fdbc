//!
//! The transport error.
//!

///
/// The transport error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request may succeed if repeated.
    #[error("{0}")]
    Transient(String),
    /// The server refused the resource, repeating the request will not help.
    #[error("HTTP status {status}")]
    Rejected {
        /// The HTTP status code.
        status: u16,
    },
}
