//!
//! The result assembly from the normalized tables.
//!


pub mod test_result;

pub use self::test_result::TestResult;

use std::collections::BTreeSet;
use std::collections::HashMap;

use crate::model::availability;
use crate::model::BenchRecord;
use crate::model::TestRecord;
use crate::normalizer::geometric_average;

///
/// Groups the sub-benchmark records by submission.
///
/// A later record with the same benchmark name replaces the earlier one in
/// its original position.
///
pub fn group_benches(benches: Vec<BenchRecord>) -> HashMap<String, Vec<BenchRecord>> {
    let mut groups: HashMap<String, Vec<BenchRecord>> = HashMap::new();
    for bench in benches.into_iter() {
        let group = groups.entry(bench.test_id.clone()).or_default();
        match group
            .iter_mut()
            .find(|existing| existing.bench_name == bench.bench_name)
        {
            Some(existing) => *existing = bench,
            None => group.push(bench),
        }
    }
    groups
}

///
/// Joins each submission with its sub-benchmarks and computes its score.
///
/// Sub-benchmarks named in `excluded` are dropped from the join. The score
/// is the geometric mean of the remaining base scores that are numeric.
///
pub fn assemble(
    tests: Vec<TestRecord>,
    benches: Vec<BenchRecord>,
    excluded: &BTreeSet<String>,
) -> Vec<TestResult> {
    let mut groups = group_benches(benches);

    tests
        .into_iter()
        .map(|record| {
            let benches: Vec<BenchRecord> = groups
                .remove(record.test_id.as_str())
                .unwrap_or_default()
                .into_iter()
                .filter(|bench| !excluded.contains(bench.bench_name.as_str()))
                .collect();
            let bases: Vec<f64> = benches
                .iter()
                .filter_map(|bench| bench.base.value())
                .collect();
            let score = geometric_average(bases.as_slice());
            let hardware_date = availability::parse(record.hw_avail.as_str());

            TestResult {
                record,
                benches,
                score,
                hardware_date,
            }
        })
        .collect()
}
