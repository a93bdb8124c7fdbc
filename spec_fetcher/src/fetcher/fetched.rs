//!
//! The fetch outcome.
//!

///
/// The fetch outcome.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetched {
    /// The file was already in the cache.
    Cached,
    /// The file was downloaded after the given number of retries.
    Downloaded {
        /// The number of failed attempts before the successful one.
        retries: usize,
    },
}

impl std::fmt::Display for Fetched {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cached => write!(f, "Cached"),
            Self::Downloaded { retries: 0 } => write!(f, "Fetched"),
            Self::Downloaded { retries } => write!(f, "Fetched after {retries} retries"),
        }
    }
}
