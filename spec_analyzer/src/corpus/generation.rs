//!
//! The report generation of the corpus.
//!

use std::path::PathBuf;

use serde::Deserialize;

use crate::model::Dialect;

use super::index::Index;

///
/// The report generation of the corpus.
///
#[derive(Debug, Deserialize)]
pub struct Generation {
    /// The report dialect.
    pub dialect: Dialect,
    /// The local report directory.
    pub directory: PathBuf,
    /// The report file name pattern inside the directory.
    pub report_pattern: String,
    /// The remote results index.
    pub index: Index,
}

impl Generation {
    ///
    /// Lists the local reports, sorted by path.
    ///
    /// The pattern is matched case-insensitively. An entry that cannot be
    /// read is an error.
    ///
    pub fn report_paths(&self) -> anyhow::Result<Vec<PathBuf>> {
        let pattern = self.directory.join(self.report_pattern.as_str());
        let pattern = pattern.to_string_lossy();
        let options = glob::MatchOptions {
            case_sensitive: false,
            ..glob::MatchOptions::default()
        };

        let mut paths = Vec::new();
        for entry in glob::glob_with(pattern.as_ref(), options)
            .map_err(|error| anyhow::anyhow!("Report pattern `{pattern}` is invalid: {error}"))?
        {
            let path = entry.map_err(|error| {
                anyhow::anyhow!("Report {:?} listing error: {}", error.path(), error.error())
            })?;
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}
