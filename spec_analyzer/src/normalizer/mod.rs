//!
//! The cross-generation score normalizer.
//!
//! The suites of different generations use unrelated absolute scales. CPUs
//! measured under two adjacent generations anchor a conversion ratio between
//! them, and the ratios are chained to bring every score onto one scale.
//! Scores are ratios of run times, so every average here is geometric.
//!


pub mod boundary_ratio;
pub mod calibrated_result;

use std::collections::BTreeMap;

use crate::cpu::CpuDatabase;
use crate::cpu::CpuId;
use crate::model::Dialect;
use crate::model::Metric;
use crate::results::TestResult;
use crate::table;

use self::boundary_ratio::BoundaryRatio;
use self::calibrated_result::CalibratedResult;

///
/// The geometric mean of the values, 1 for an empty set.
///
pub fn geometric_average(values: &[f64]) -> f64 {
    match values {
        [] => 1.0,
        [value] => *value,
        values => {
            let log_sum: f64 = values.iter().map(|value| value.ln()).sum();
            (log_sum / values.len() as f64).exp()
        }
    }
}

///
/// The conversion factors between the generations of one metric.
///
#[derive(Debug, Clone)]
pub struct Calibration {
    /// The generation whose scale the scores are converted to.
    pub anchor: Dialect,
    /// The ratios between each pair of adjacent generations, oldest first.
    pub boundaries: Vec<BoundaryRatio>,
    /// The factor converting each generation to the anchor scale, by `Dialect::index`.
    factors: [f64; 3],
}

impl Calibration {
    ///
    /// Derives the calibration from the scores of each CPU by generation.
    ///
    /// A CPU contributes one ratio candidate per pair of adjacent generations
    /// it has scores in. The global ratio of a boundary is the geometric mean
    /// of its candidates, 1 when there are none.
    ///
    pub fn new<K>(scores: &BTreeMap<K, Vec<(Dialect, f64)>>, anchor: Dialect) -> Self {
        let boundaries: Vec<BoundaryRatio> = Dialect::ALL
            .windows(2)
            .map(|pair| {
                let (older, newer) = (pair[0], pair[1]);
                let candidates: Vec<f64> = scores
                    .values()
                    .filter_map(|scores| {
                        let older_scores = Self::slice(scores, older);
                        let newer_scores = Self::slice(scores, newer);
                        if older_scores.is_empty() || newer_scores.is_empty() {
                            return None;
                        }
                        Some(
                            geometric_average(newer_scores.as_slice())
                                / geometric_average(older_scores.as_slice()),
                        )
                    })
                    .collect();
                BoundaryRatio::new(
                    older,
                    newer,
                    geometric_average(candidates.as_slice()),
                    candidates.len(),
                )
            })
            .collect();

        let mut factors = [1.0; 3];
        for dialect in Dialect::ALL {
            factors[dialect.index()] = boundaries
                .iter()
                .map(|boundary| {
                    if dialect <= boundary.older && boundary.newer <= anchor {
                        boundary.ratio
                    } else if anchor <= boundary.older && boundary.newer <= dialect {
                        1.0 / boundary.ratio
                    } else {
                        1.0
                    }
                })
                .product();
        }

        Self {
            anchor,
            boundaries,
            factors,
        }
    }

    ///
    /// The factor converting scores of `dialect` to the anchor scale.
    ///
    pub fn factor(&self, dialect: Dialect) -> f64 {
        self.factors[dialect.index()]
    }

    ///
    /// Converts a score of `dialect` to the anchor scale.
    ///
    pub fn convert(&self, dialect: Dialect, score: f64) -> f64 {
        score * self.factor(dialect)
    }

    ///
    /// The scores of one generation.
    ///
    fn slice(scores: &[(Dialect, f64)], dialect: Dialect) -> Vec<f64> {
        scores
            .iter()
            .filter(|(generation, _)| *generation == dialect)
            .map(|(_, score)| *score)
            .collect()
    }
}

///
/// The calibrated results of one metric.
///
#[derive(Debug, Clone)]
pub struct CalibratedRun {
    /// The metric.
    pub metric: Metric,
    /// The calibration.
    pub calibration: Calibration,
    /// The converted results of each brand, by hardware date and converted score.
    pub by_brand: BTreeMap<String, Vec<CalibratedResult>>,
}

impl CalibratedRun {
    /// The listing table header.
    pub const LISTING_HEADER: [&'static str; 8] = [
        "brand",
        "model",
        "mhz",
        "hwAvail",
        "testID",
        "benchType",
        "score",
        "convertedScore",
    ];

    ///
    /// Resolves the CPUs of the metric's results and converts their scores.
    ///
    /// The database is shared across metrics, so identities resolved for one
    /// metric are reused by the next.
    ///
    pub fn new(
        results: &[TestResult],
        database: &mut CpuDatabase,
        metric: Metric,
        anchor: Dialect,
    ) -> Self {
        let mut by_cpu: BTreeMap<CpuId, Vec<usize>> = BTreeMap::new();
        for (index, result) in results.iter().enumerate() {
            if result.record.bench_type.metric() != metric {
                continue;
            }
            let id = database.identify(
                result.record.cpu.as_str(),
                result.record.machine.as_str(),
                result.record.mhz,
            );
            by_cpu.entry(id).or_default().push(index);
        }

        let scores: BTreeMap<CpuId, Vec<(Dialect, f64)>> = by_cpu
            .iter()
            .map(|(id, indexes)| {
                let scores = indexes
                    .iter()
                    .map(|index| {
                        let result = &results[*index];
                        (result.record.bench_type.dialect(), result.score)
                    })
                    .collect();
                (*id, scores)
            })
            .collect();
        let calibration = Calibration::new(&scores, anchor);

        let mut by_brand: BTreeMap<String, Vec<CalibratedResult>> = BTreeMap::new();
        for (id, indexes) in by_cpu.into_iter() {
            let brand = database.get(id).brand.clone();
            for index in indexes.into_iter() {
                let result = &results[index];
                let converted_score =
                    calibration.convert(result.record.bench_type.dialect(), result.score);
                by_brand
                    .entry(brand.clone())
                    .or_default()
                    .push(CalibratedResult::new(
                        result.hardware_date,
                        converted_score,
                        id,
                        index,
                    ));
            }
        }
        for results in by_brand.values_mut() {
            results.sort_by(CalibratedResult::chronological);
        }

        Self {
            metric,
            calibration,
            by_brand,
        }
    }

    ///
    /// Encodes the per-brand listing as a delimited table with a header row.
    ///
    /// `results` and `database` must be the ones the run was built from.
    ///
    pub fn listing(&self, results: &[TestResult], database: &CpuDatabase) -> String {
        let mut content = String::new();
        table::csv::write_record(&mut content, &Self::LISTING_HEADER);
        for calibrated in self.by_brand.values().flatten() {
            let result = &results[calibrated.result];
            let cpu = database.get(calibrated.cpu);
            table::csv::write_record(
                &mut content,
                &[
                    cpu.brand.clone(),
                    cpu.model.clone(),
                    cpu.mhz.to_string(),
                    result.record.hw_avail.clone(),
                    result.record.test_id.clone(),
                    result.record.bench_type.to_string(),
                    result.score.to_string(),
                    calibrated.converted_score.to_string(),
                ],
            );
        }
        content
    }
}
