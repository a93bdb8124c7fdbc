//!
//! The line-scan error.
//!

///
/// The line-scan error.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// No clock speed with a MHz or GHz unit is embedded in the text.
    #[error("No clock speed found in `{text}`")]
    NoClockSpeed {
        /// The scanned text.
        text: String,
    },
}
