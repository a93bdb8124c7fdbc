//!
//! The auto-parallel contribution analysis.
//!
//! Compilers that parallelize automatically can inflate a few sub-benchmarks
//! far above the rest of a submission. This analysis finds, for each
//! sub-benchmark, the largest multiple of its submission's geometric mean.
//!


pub mod contribution;

pub use self::contribution::Contribution;

use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::model::BenchRecord;
use crate::model::Metric;
use crate::model::TestRecord;
use crate::normalizer::geometric_average;

///
/// Returns the top contribution of each sub-benchmark among the auto-parallel
/// submissions of `metric`, largest multiple first.
///
pub fn top_contributions(
    tests: &[TestRecord],
    benches: &HashMap<String, Vec<BenchRecord>>,
    metric: Metric,
) -> Vec<Contribution> {
    let mut top: BTreeMap<&str, Contribution> = BTreeMap::new();

    for test in tests.iter() {
        if !test.auto_parallel || test.bench_type.metric() != metric {
            continue;
        }
        let Some(rows) = benches.get(test.test_id.as_str()) else {
            continue;
        };
        let scored: Vec<(&BenchRecord, f64)> = rows
            .iter()
            .filter_map(|bench| bench.base.value().map(|base| (bench, base)))
            .collect();
        let bases: Vec<f64> = scored.iter().map(|(_, base)| *base).collect();
        let average = geometric_average(bases.as_slice());

        for (bench, base) in scored.into_iter() {
            let multiple = base / average;
            let is_better = top
                .get(bench.bench_name.as_str())
                .map(|current| multiple > current.multiple)
                .unwrap_or(true);
            if is_better {
                top.insert(
                    bench.bench_name.as_str(),
                    Contribution::new(
                        bench.bench_name.clone(),
                        multiple,
                        test.test_id.clone(),
                        test.machine.clone(),
                    ),
                );
            }
        }
    }

    let mut contributions: Vec<Contribution> = top.into_values().collect();
    contributions.sort_by(|a, b| {
        b.multiple
            .total_cmp(&a.multiple)
            .then_with(|| b.bench_name.cmp(&a.bench_name))
    });
    contributions
}
