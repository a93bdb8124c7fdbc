//!
//! The remote content transport.
//!

pub mod error;
pub mod http;

use self::error::Error;

///
/// The remote content transport.
///
/// Shared by the fetch workers, so it must be usable from several threads.
///
pub trait Transport: Sync {
    ///
    /// Downloads the content at `url`.
    ///
    fn get(&self, url: &str) -> Result<Vec<u8>, Error>;
}
