//!
//! The sub-benchmark record.
//!

use super::score::Score;

///
/// One sub-benchmark result of a submission.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchRecord {
    /// The parent submission identifier.
    pub test_id: String,
    /// The sub-benchmark name, e.g. `164.gzip`.
    pub bench_name: String,
    /// The base score.
    pub base: Score,
    /// The peak score.
    pub peak: Score,
}

impl BenchRecord {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(test_id: String, bench_name: String, base: Score, peak: Score) -> Self {
        Self {
            test_id,
            bench_name,
            base,
            peak,
        }
    }
}
