//!
//! The sub-benchmark table row.
//!

use crate::model::BenchRecord;
use crate::model::Score;

use super::Row;

impl Row for BenchRecord {
    const HEADER: &'static [&'static str] = &["testID", "benchName", "base", "peak"];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.test_id.clone(),
            self.bench_name.clone(),
            self.base.to_string(),
            self.peak.to_string(),
        ]
    }

    fn from_fields(fields: Vec<String>) -> Result<Self, String> {
        super::check_width::<Self>(fields.as_slice())?;

        let mut fields = fields.into_iter();
        let mut next = || fields.next().unwrap_or_default();

        Ok(Self::new(
            next(),
            next(),
            Score::new(next()),
            Score::new(next()),
        ))
    }
}
