//!
//! The fetch target.
//!

use std::path::PathBuf;

///
/// A remote file and its cache path.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// The remote URL.
    pub url: String,
    /// The local cache path.
    pub path: PathBuf,
}

impl Target {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(url: String, path: PathBuf) -> Self {
        Self { url, path }
    }
}
