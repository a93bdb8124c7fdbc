//!
//! The report parsing error.
//!

use std::path::PathBuf;

///
/// The report parsing error.
///
/// Every variant rejects a single file. The corpus scan records it and continues.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The report cannot be read.
    #[error("Reading report {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The report path.
        path: PathBuf,
    },
    /// The summary row label is absent from the dialect table.
    #[error("Report {path:?} has an unrecognized benchmark label `{label}`")]
    UnrecognizedBenchmarkLabel {
        /// The report path.
        path: PathBuf,
        /// The summary row label.
        label: String,
    },
    /// A required property is absent.
    #[error("Report {path:?} is missing the required field `{key}`")]
    MissingRequiredField {
        /// The report path.
        path: PathBuf,
        /// The property key.
        key: String,
    },
    /// The clock speed cannot be determined.
    #[error("Report {path:?} has a malformed clock speed `{text}`")]
    MalformedClockSpeed {
        /// The report path.
        path: PathBuf,
        /// The text the clock speed was expected in.
        text: String,
    },
    /// The auto-parallel flag is neither `Yes` nor `No`.
    #[error("Report {path:?} has an invalid auto-parallel flag `{text}`")]
    InvalidAutoParallel {
        /// The report path.
        path: PathBuf,
        /// The flag text.
        text: String,
    },
    /// The report ends before the section is complete.
    #[error("Report {path:?} ends unexpectedly in the {section}")]
    UnexpectedEnd {
        /// The report path.
        path: PathBuf,
        /// The unfinished section.
        section: &'static str,
    },
    /// The benchmark table has no rows.
    #[error("Report {path:?} has an empty benchmark table")]
    EmptyBenchmarkTable {
        /// The report path.
        path: PathBuf,
    },
    /// The companion HTML file cannot be read.
    #[error("Reading companion page {path:?}: {error}")]
    CompanionReading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The companion page path.
        path: PathBuf,
    },
}

impl Error {
    ///
    /// Whether the error signals a report variant the dialect tables do not know.
    ///
    pub fn is_unrecognized_variant(&self) -> bool {
        matches!(self, Self::UnrecognizedBenchmarkLabel { .. })
    }
}
