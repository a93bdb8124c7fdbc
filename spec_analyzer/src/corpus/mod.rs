//!
//! The corpus configuration.
//!


pub mod generation;
pub mod index;

use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::model::Dialect;

use self::generation::Generation;

///
/// The corpus configuration.
///
#[derive(Debug, Deserialize)]
pub struct Config {
    /// The report generations.
    pub generations: Vec<Generation>,
    /// The sub-benchmarks left out of the aggregate scores.
    #[serde(default)]
    pub disqualified_benchmarks: BTreeSet<String>,
}

impl Config {
    /// The default configuration path.
    pub const DEFAULT_PATH: &'static str = "./configs/corpus.json";

    ///
    /// Lists the reports of every generation as dialect and path pairs.
    ///
    /// Generations are listed in configuration order and reports in path order.
    ///
    pub fn reports(&self) -> anyhow::Result<Vec<(Dialect, PathBuf)>> {
        let mut reports = Vec::new();
        for generation in self.generations.iter() {
            reports.extend(
                generation
                    .report_paths()?
                    .into_iter()
                    .map(|path| (generation.dialect, path)),
            );
        }
        Ok(reports)
    }
}

impl TryFrom<&Path> for Config {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let file = std::fs::File::open(path).map_err(|error| {
            anyhow::anyhow!("Corpus config {:?} opening error: {}", path, error)
        })?;
        let reader = std::io::BufReader::new(file);
        let config: Self = serde_json::from_reader(reader).map_err(|error| {
            anyhow::anyhow!("Corpus config {:?} parsing error: {}", path, error)
        })?;
        Ok(config)
    }
}
