//!
//! The fixed-column layouts of the report dialects.
//!

use std::ops::Range;

use crate::model::BenchType;
use crate::model::Dialect;

use super::property_table::format::Format;

///
/// The leading lines that seed fields printed nowhere else.
///
#[derive(Debug)]
pub struct Preamble {
    /// The first-line banner that marks a withdrawn result.
    pub banner: Option<&'static str>,
    /// Whether the second line carries the machine name.
    pub machine_line: bool,
    /// The hardware availability line.
    pub availability: regex::Regex,
    /// The tester line.
    pub tester: regex::Regex,
}

///
/// Where the clock speed of a submission comes from.
///
#[derive(Debug, Clone, Copy)]
pub enum ClockSpeed {
    /// Embedded in the CPU name.
    CpuName,
    /// A numeric property.
    Property(&'static str),
}

///
/// Where a text field of a submission comes from.
///
#[derive(Debug, Clone, Copy)]
pub enum Field {
    /// The preamble.
    Preamble,
    /// A property.
    Property(&'static str),
    /// A property, falling back to the companion HTML page when absent.
    PropertyOrCompanion(&'static str),
}

///
/// The fixed-column layout of a dialect.
///
#[derive(Debug)]
pub struct Layout {
    /// The dialect.
    pub dialect: Dialect,
    /// The preamble, if the dialect has one.
    pub preamble: Option<Preamble>,
    /// The prefix of the line that ends the header.
    pub header_terminator: &'static str,
    /// The header substrings marking a disqualified submission.
    pub disqualification_markers: &'static [&'static str],
    /// The summary row, capturing the benchmark type label.
    pub summary: regex::Regex,
    /// The benchmark name span.
    pub name_columns: Range<usize>,
    /// The base score span.
    pub base_columns: Range<usize>,
    /// The peak score span.
    pub peak_columns: Range<usize>,
    /// The label substring of throughput rate submissions.
    pub rate_marker: &'static str,
    /// The summary labels and their benchmark types.
    pub labels: &'static [(&'static str, BenchType)],
    /// The property block layout.
    pub properties: Format,
    /// The CPU name property.
    pub cpu: &'static str,
    /// The clock speed source.
    pub clock_speed: ClockSpeed,
    /// The machine name source.
    pub machine: Field,
    /// The hardware availability source.
    pub availability: Field,
    /// The tester source.
    pub tester: Field,
    /// The auto-parallel flag property, if the dialect reports it.
    pub auto_parallel: Option<&'static str>,
}

/// The disqualification marker shared by every dialect.
pub const WAS_NOT_IN_COMPLIANCE: &str = "SPEC has determined that this result was not in";

/// The disqualification marker of the newest dialect.
pub const IS_NOT_IN_COMPLIANCE: &str = "SPEC has determined that this result is not in";

/// The operating system property.
pub const OPERATING_SYSTEM: &str = "Operating System";

/// The compiler property.
pub const COMPILER: &str = "Compiler";

lazy_static::lazy_static! {
    ///
    /// The layouts, indexed by `Dialect::index`.
    ///
    static ref LAYOUTS: [Layout; 3] = [
        Layout {
            dialect: Dialect::Cpu95,
            preamble: None,
            header_terminator:
                "   ------------  --------  --------  --------  --------  --------  --------",
            disqualification_markers: &[WAS_NOT_IN_COMPLIANCE],
            summary: regex::Regex::new(r"^   (SPEC.{32}) ").expect("Always valid"),
            name_columns: 0..15,
            base_columns: 35..45,
            peak_columns: 65..75,
            rate_marker: "_rate",
            labels: &[
                ("SPECint_base95 (Geom. Mean)", BenchType::Cint95),
                ("SPECfp_base95 (Geom. Mean)", BenchType::Cfp95),
            ],
            properties: Format {
                section_headers: &[
                    "HARDWARE",
                    "SOFTWARE",
                    "TESTER INFORMATION",
                    "------------------",
                    "--------",
                ],
                end_marker: "NOTES",
                label_column: 19,
                description_column: 21,
            },
            cpu: "CPU",
            clock_speed: ClockSpeed::CpuName,
            machine: Field::Property("Model Name"),
            availability: Field::PropertyOrCompanion("Hardware Avail"),
            tester: Field::PropertyOrCompanion("Tested By"),
            auto_parallel: None,
        },
        Layout {
            dialect: Dialect::Cpu2000,
            preamble: Some(Preamble {
                banner: None,
                machine_line: false,
                availability: regex::Regex::new("Hardware availability: (.*)")
                    .expect("Always valid"),
                tester: regex::Regex::new("Tester: (.*?) *Software availability")
                    .expect("Always valid"),
            }),
            header_terminator:
                "   ========================================================================",
            disqualification_markers: &[WAS_NOT_IN_COMPLIANCE],
            summary: regex::Regex::new(r"^   (SPEC.{24})    ").expect("Always valid"),
            name_columns: 0..15,
            base_columns: 35..45,
            peak_columns: 65..75,
            rate_marker: "_rate_",
            labels: &[
                ("SPECint_base2000", BenchType::Cint2000),
                ("SPECfp_base2000", BenchType::Cfp2000),
            ],
            properties: Format {
                section_headers: &["HARDWARE", "SOFTWARE", "--------"],
                end_marker: "NOTES",
                label_column: 20,
                description_column: 22,
            },
            cpu: "CPU",
            clock_speed: ClockSpeed::Property("CPU MHz"),
            machine: Field::Property("Model Name"),
            availability: Field::Preamble,
            tester: Field::Preamble,
            auto_parallel: None,
        },
        Layout {
            dialect: Dialect::Cpu2006,
            preamble: Some(Preamble {
                banner: Some("######################"),
                machine_line: true,
                availability: regex::Regex::new("Hardware availability: (.*)")
                    .expect("Always valid"),
                tester: regex::Regex::new("Tested by:    (.*?) *Software availability")
                    .expect("Always valid"),
            }),
            header_terminator:
                "==============================================================================",
            disqualification_markers: &[WAS_NOT_IN_COMPLIANCE, IS_NOT_IN_COMPLIANCE],
            summary: regex::Regex::new(r"^ (SPEC.{27})    ").expect("Always valid"),
            name_columns: 0..15,
            base_columns: 33..43,
            peak_columns: 65..75,
            rate_marker: "_rate_",
            labels: &[
                ("SPECint(R)_base2006", BenchType::Cint2006),
                ("SPECfp(R)_base2006", BenchType::Cfp2006),
            ],
            properties: Format {
                section_headers: &["HARDWARE", "SOFTWARE", "--------"],
                end_marker: "Submit Notes",
                label_column: 20,
                description_column: 22,
            },
            cpu: "CPU Name",
            clock_speed: ClockSpeed::Property("CPU MHz"),
            machine: Field::Preamble,
            availability: Field::Preamble,
            tester: Field::Preamble,
            auto_parallel: Some("Auto Parallel"),
        },
    ];
}

impl Layout {
    ///
    /// Returns the layout of `dialect`.
    ///
    pub fn of(dialect: Dialect) -> &'static Self {
        &LAYOUTS[dialect.index()]
    }

    ///
    /// Maps a summary label to its benchmark type.
    ///
    pub fn bench_type(&self, label: &str) -> Option<BenchType> {
        self.labels
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, bench_type)| *bench_type)
    }

    ///
    /// Whether the line carries a disqualification marker.
    ///
    pub fn is_disqualification(&self, line: &str) -> bool {
        self.disqualification_markers
            .iter()
            .any(|marker| line.contains(marker))
    }
}
