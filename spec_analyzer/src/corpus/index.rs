//!
//! The remote results index of a generation.
//!

use std::path::PathBuf;

use serde::Deserialize;

///
/// The remote results index of a generation.
///
#[derive(Debug, Clone, Deserialize)]
pub struct Index {
    /// The index page URL.
    pub url: String,
    /// The local cache path of the index page.
    pub path: PathBuf,
    /// The prefix turning an index link into a URL.
    pub link_prefix: String,
    /// The extensions of the linked files worth fetching, without the dot.
    pub link_extensions: Vec<String>,
}
