//!
//! The submission record.
//!

use super::bench_type::BenchType;
use super::score::Score;

///
/// One admitted benchmark submission.
///
#[derive(Debug, Clone, PartialEq)]
pub struct TestRecord {
    /// The submission identifier, the report file stem.
    pub test_id: String,
    /// The submitting organization.
    pub tester: String,
    /// The machine model name.
    pub machine: String,
    /// The free-text CPU name.
    pub cpu: String,
    /// The clock speed in MHz.
    pub mhz: f64,
    /// The hardware availability, `Mon-YYYY` when recognized.
    pub hw_avail: String,
    /// The operating system.
    pub os: String,
    /// The compiler.
    pub compiler: String,
    /// Whether the compiler parallelized the benchmarks automatically.
    pub auto_parallel: bool,
    /// The benchmark category.
    pub bench_type: BenchType,
    /// The aggregate base score.
    pub base: Score,
    /// The aggregate peak score.
    pub peak: Score,
}

impl TestRecord {
    /// The text written for an enabled flag.
    pub const FLAG_YES: &'static str = "Yes";

    /// The text written for a disabled flag.
    pub const FLAG_NO: &'static str = "No";

    ///
    /// Parses a `Yes` or `No` flag, ignoring case and anything after the first word.
    ///
    pub fn parse_flag(text: &str) -> Option<bool> {
        let word = text.split_whitespace().next()?;
        if word.eq_ignore_ascii_case(Self::FLAG_YES) {
            Some(true)
        } else if word.eq_ignore_ascii_case(Self::FLAG_NO) {
            Some(false)
        } else {
            None
        }
    }

    ///
    /// Formats a flag.
    ///
    pub fn format_flag(flag: bool) -> &'static str {
        if flag {
            Self::FLAG_YES
        } else {
            Self::FLAG_NO
        }
    }
}
