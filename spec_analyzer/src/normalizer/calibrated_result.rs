//!
//! The result converted to the anchor scale.
//!

use chrono::NaiveDate;

use crate::cpu::CpuId;

///
/// The result converted to the anchor scale.
///
#[derive(Debug, Clone, PartialEq)]
pub struct CalibratedResult {
    /// The hardware availability date.
    pub hardware_date: Option<NaiveDate>,
    /// The score on the anchor scale.
    pub converted_score: f64,
    /// The resolved CPU.
    pub cpu: CpuId,
    /// The position of the result in the assembled results.
    pub result: usize,
}

impl CalibratedResult {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        hardware_date: Option<NaiveDate>,
        converted_score: f64,
        cpu: CpuId,
        result: usize,
    ) -> Self {
        Self {
            hardware_date,
            converted_score,
            cpu,
            result,
        }
    }

    ///
    /// Orders by hardware date, then by converted score. Undated results come first.
    ///
    pub fn chronological(&self, other: &Self) -> std::cmp::Ordering {
        self.hardware_date
            .cmp(&other.hardware_date)
            .then_with(|| self.converted_score.total_cmp(&other.converted_score))
    }
}
