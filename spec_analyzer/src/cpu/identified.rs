//!
//! The listing of identified CPU names, for tuning the classification rules.
//!

use std::collections::BTreeMap;

use crate::model::TestRecord;
use crate::table::csv;

use super::CpuDatabase;

/// The listing header.
pub const HEADER: [&str; 6] = ["brand", "model", "mhz", "cpu", "benchType", "testID"];

///
/// Encodes one row per distinct CPU name as reported, ordered by that name.
///
/// Each row shows the identity the name resolves to, with the clock speed and
/// submission of the last record carrying the name.
///
pub fn encode<'a, I>(database: &mut CpuDatabase, tests: I) -> String
where
    I: IntoIterator<Item = &'a TestRecord>,
{
    let mut latest: BTreeMap<&str, &TestRecord> = BTreeMap::new();
    for test in tests.into_iter() {
        latest.insert(test.cpu.as_str(), test);
    }

    let mut content = String::new();
    csv::write_record(&mut content, &HEADER);
    for (cpu, test) in latest.into_iter() {
        let id = database.identify(cpu, test.machine.as_str(), test.mhz);
        let info = database.get(id);
        csv::write_record(
            &mut content,
            &[
                info.brand.clone(),
                info.model.clone(),
                format!("{:.0}", test.mhz),
                cpu.to_owned(),
                test.bench_type.to_string(),
                test.test_id.clone(),
            ],
        );
    }
    content
}
