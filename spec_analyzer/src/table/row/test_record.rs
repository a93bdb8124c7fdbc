//!
//! The submission table row.
//!

use std::str::FromStr;

use crate::model::BenchType;
use crate::model::Score;
use crate::model::TestRecord;

use super::Row;

impl Row for TestRecord {
    const HEADER: &'static [&'static str] = &[
        "testID",
        "tester",
        "machine",
        "cpu",
        "mhz",
        "hwAvail",
        "os",
        "compiler",
        "autoParallel",
        "benchType",
        "base",
        "peak",
    ];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.test_id.clone(),
            self.tester.clone(),
            self.machine.clone(),
            self.cpu.clone(),
            self.mhz.to_string(),
            self.hw_avail.clone(),
            self.os.clone(),
            self.compiler.clone(),
            Self::format_flag(self.auto_parallel).to_owned(),
            self.bench_type.to_string(),
            self.base.to_string(),
            self.peak.to_string(),
        ]
    }

    fn from_fields(fields: Vec<String>) -> Result<Self, String> {
        super::check_width::<Self>(fields.as_slice())?;

        let mut fields = fields.into_iter();
        let mut next = || fields.next().unwrap_or_default();

        let test_id = next();
        let tester = next();
        let machine = next();
        let cpu = next();
        let mhz = next();
        let mhz = mhz
            .parse::<f64>()
            .map_err(|error| format!("invalid clock speed `{mhz}`: {error}"))?;
        let hw_avail = next();
        let os = next();
        let compiler = next();
        let auto_parallel = next();
        let auto_parallel = Self::parse_flag(auto_parallel.as_str())
            .ok_or_else(|| format!("invalid auto-parallel flag `{auto_parallel}`"))?;
        let bench_type = BenchType::from_str(next().as_str()).map_err(|error| error.to_string())?;
        let base = Score::new(next());
        let peak = Score::new(next());

        Ok(Self {
            test_id,
            tester,
            machine,
            cpu,
            mhz,
            hw_avail,
            os,
            compiler,
            auto_parallel,
            bench_type,
            base,
            peak,
        })
    }
}
