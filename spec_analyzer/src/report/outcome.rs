//!
//! The report parsing outcome.
//!

use crate::model::BenchRecord;
use crate::model::TestRecord;

///
/// The report parsing outcome.
///
/// A submission is admitted with all of its rows or not at all.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The submission is admitted.
    Admitted {
        /// The submission record.
        test: TestRecord,
        /// The sub-benchmark records, never empty.
        benches: Vec<BenchRecord>,
    },
    /// The submission carries a disqualification marker.
    Disqualified,
    /// The submission measures a throughput rate, which is not modeled.
    RateExcluded,
}

impl Outcome {
    ///
    /// Converts the outcome into the pair of record lists.
    ///
    pub fn into_records(self) -> (Vec<TestRecord>, Vec<BenchRecord>) {
        match self {
            Self::Admitted { test, benches } => (vec![test], benches),
            Self::Disqualified | Self::RateExcluded => (vec![], vec![]),
        }
    }
}
