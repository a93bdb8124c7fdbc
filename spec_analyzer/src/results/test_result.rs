//!
//! The submission joined with its sub-benchmarks.
//!

use chrono::NaiveDate;

use crate::model::BenchRecord;
use crate::model::TestRecord;

///
/// The submission joined with its retained sub-benchmarks.
///
/// Derived from the tables on every run and never persisted.
///
#[derive(Debug, Clone, PartialEq)]
pub struct TestResult {
    /// The submission.
    pub record: TestRecord,
    /// The sub-benchmarks left after the exclusion list is applied.
    pub benches: Vec<BenchRecord>,
    /// The geometric mean of the numeric base scores of `benches`.
    pub score: f64,
    /// The hardware availability, if it is a `Mon-YYYY` date.
    pub hardware_date: Option<NaiveDate>,
}
