//!
//! The corpus ingestion into the normalized tables.
//!


use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use crate::model::BenchRecord;
use crate::model::Dialect;
use crate::model::TestRecord;
use crate::report;
use crate::report::Outcome;
use crate::summary::Summary;
use crate::table;

///
/// The records collected from the corpus.
///
#[derive(Debug, Default)]
pub struct Ingest {
    /// The submission records, one per admitted report.
    pub tests: Vec<TestRecord>,
    /// The sub-benchmark records of the admitted reports.
    pub benches: Vec<BenchRecord>,
}

impl Ingest {
    ///
    /// Parses every report in order, recording each outcome in the summary.
    ///
    /// A report whose submission identifier was already admitted is skipped,
    /// so that identifiers stay unique across generations.
    ///
    pub fn run(reports: Vec<(Dialect, PathBuf)>, summary: &mut Summary) -> Self {
        let mut ingest = Self::default();
        let mut test_ids = HashSet::with_capacity(reports.len());

        for (dialect, path) in reports.into_iter() {
            let outcome = match report::parse(path.clone(), dialect) {
                Ok(outcome) => outcome,
                Err(error) => {
                    summary.error(&error);
                    continue;
                }
            };
            if let Outcome::Admitted { ref test, .. } = outcome {
                if !test_ids.insert(test.test_id.clone()) {
                    summary.duplicate(path.as_path(), test.test_id.as_str());
                    continue;
                }
            }
            summary.outcome(path.as_path(), &outcome);

            let (tests, benches) = outcome.into_records();
            ingest.tests.extend(tests);
            ingest.benches.extend(benches);
        }

        ingest
    }

    ///
    /// Writes both tables into `directory`, creating it if needed.
    ///
    pub fn write(&self, directory: &Path) -> anyhow::Result<()> {
        std::fs::create_dir_all(directory).map_err(|error| {
            anyhow::anyhow!("Output directory {:?} creating error: {}", directory, error)
        })?;
        table::write(
            directory.join(table::SUMMARIES_FILE_NAME).as_path(),
            self.tests.as_slice(),
        )?;
        table::write(
            directory.join(table::BENCHMARKS_FILE_NAME).as_path(),
            self.benches.as_slice(),
        )?;
        Ok(())
    }

    ///
    /// Reads both tables back from `directory`.
    ///
    pub fn read(directory: &Path) -> anyhow::Result<Self> {
        let tests = table::read(directory.join(table::SUMMARIES_FILE_NAME).as_path())?;
        let benches = table::read(directory.join(table::BENCHMARKS_FILE_NAME).as_path())?;
        Ok(Self { tests, benches })
    }
}
