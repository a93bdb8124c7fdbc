//!
//! The dialect report parser.
//!

#[cfg(test)]
mod tests;

pub mod companion;
pub mod error;
pub mod layout;
pub mod outcome;
pub mod property_table;

pub use self::error::Error;
pub use self::outcome::Outcome;

use std::path::Path;
use std::path::PathBuf;

use crate::model::availability;
use crate::model::BenchRecord;
use crate::model::Dialect;
use crate::model::Score;
use crate::model::TestRecord;
use crate::scan;
use crate::scan::LineStream;

use self::companion::Companion;
use self::layout::ClockSpeed;
use self::layout::Field;
use self::layout::Layout;
use self::property_table::PropertyTable;

///
/// The fields read before the benchmark table.
///
#[derive(Debug, Default)]
struct Header {
    /// The machine name line.
    machine: Option<String>,
    /// The hardware availability.
    availability: Option<String>,
    /// The tester.
    tester: Option<String>,
}

///
/// The dialect report parser.
///
#[derive(Debug)]
pub struct Parser<'a> {
    /// The report path.
    path: &'a Path,
    /// The report identifier.
    test_id: String,
    /// The dialect layout.
    layout: &'static Layout,
}

impl<'a> Parser<'a> {
    /// The header section name used in diagnostics.
    const SECTION_HEADER: &'static str = "header";
    /// The benchmark table section name used in diagnostics.
    const SECTION_TABLE: &'static str = "benchmark table";
    /// The peak score line section name used in diagnostics.
    const SECTION_PEAK: &'static str = "peak score line";

    /// The preamble availability field name used in diagnostics.
    const PREAMBLE_AVAILABILITY: &'static str = "Hardware availability";
    /// The preamble tester field name used in diagnostics.
    const PREAMBLE_TESTER: &'static str = "Tester";
    /// The preamble machine field name used in diagnostics.
    const PREAMBLE_MACHINE: &'static str = "Machine name";

    ///
    /// A shortcut constructor.
    ///
    /// The report identifier is the file stem.
    ///
    pub fn new(path: &'a Path, dialect: Dialect) -> Self {
        let test_id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            test_id,
            layout: Layout::of(dialect),
        }
    }

    ///
    /// Reads and parses the report file.
    ///
    pub fn parse_file(&self) -> Result<Outcome, Error> {
        let bytes = std::fs::read(self.path).map_err(|error| Error::Reading {
            error,
            path: self.path.to_path_buf(),
        })?;
        self.parse(scan::decode(bytes.as_slice()).as_str())
    }

    ///
    /// Parses the report text.
    ///
    pub fn parse(&self, text: &str) -> Result<Outcome, Error> {
        if self.is_disqualified(text) {
            return Ok(Outcome::Disqualified);
        }

        let mut lines = LineStream::new(text);
        let header = self.parse_header(&mut lines)?;

        let mut benches = Vec::new();
        let (label, summary_line) = loop {
            let line = lines.next().ok_or_else(|| self.unexpected_end(Self::SECTION_TABLE))?;
            if let Some(captures) = self.layout.summary.captures(line) {
                break (captures[1].trim().to_owned(), line);
            }
            if line.trim().is_empty() {
                continue;
            }
            benches.push(BenchRecord::new(
                self.test_id.clone(),
                scan::column(line, self.layout.name_columns.clone()).to_owned(),
                self.score(line, self.layout.base_columns.clone()),
                self.score(line, self.layout.peak_columns.clone()),
            ));
        };

        if label.contains(self.layout.rate_marker) {
            return Ok(Outcome::RateExcluded);
        }
        let bench_type =
            self.layout
                .bench_type(label.as_str())
                .ok_or_else(|| Error::UnrecognizedBenchmarkLabel {
                    path: self.path.to_path_buf(),
                    label: label.clone(),
                })?;
        if benches.is_empty() {
            return Err(Error::EmptyBenchmarkTable {
                path: self.path.to_path_buf(),
            });
        }

        let base = self.score(summary_line, self.layout.base_columns.clone());
        let peak_line = lines
            .next()
            .ok_or_else(|| self.unexpected_end(Self::SECTION_PEAK))?;
        let peak = self.score(peak_line, self.layout.peak_columns.clone());

        let properties = PropertyTable::extract(&mut lines, &self.layout.properties);

        let cpu = self.require(&properties, self.layout.cpu)?.to_owned();
        let mhz = match self.layout.clock_speed {
            ClockSpeed::CpuName => {
                scan::extract_mhz_from_name(cpu.as_str()).map_err(|_| {
                    Error::MalformedClockSpeed {
                        path: self.path.to_path_buf(),
                        text: cpu.clone(),
                    }
                })?
            }
            ClockSpeed::Property(key) => {
                let text = self.require(&properties, key)?;
                text.parse::<f64>()
                    .map_err(|_| Error::MalformedClockSpeed {
                        path: self.path.to_path_buf(),
                        text: text.to_owned(),
                    })?
            }
        };
        let os = self.require(&properties, layout::OPERATING_SYSTEM)?.to_owned();
        let compiler = self.require(&properties, layout::COMPILER)?.to_owned();

        let mut companion = None;
        let hw_avail = self.field(
            self.layout.availability,
            (Self::PREAMBLE_AVAILABILITY, header.availability),
            &properties,
            &mut companion,
            Companion::hardware_availability,
        )?;
        let tester = self.field(
            self.layout.tester,
            (Self::PREAMBLE_TESTER, header.tester),
            &properties,
            &mut companion,
            Companion::tester,
        )?;
        let machine = self.field(
            self.layout.machine,
            (Self::PREAMBLE_MACHINE, header.machine),
            &properties,
            &mut companion,
            |_| None,
        )?;

        let auto_parallel = match self.layout.auto_parallel {
            Some(key) => {
                let text = self.require(&properties, key)?;
                TestRecord::parse_flag(text).ok_or_else(|| Error::InvalidAutoParallel {
                    path: self.path.to_path_buf(),
                    text: text.to_owned(),
                })?
            }
            None => false,
        };

        let test = TestRecord {
            test_id: self.test_id.clone(),
            tester,
            machine,
            cpu,
            mhz,
            hw_avail: availability::normalize(hw_avail.as_str()),
            os,
            compiler,
            auto_parallel,
            bench_type,
            base,
            peak,
        };
        Ok(Outcome::Admitted { test, benches })
    }

    ///
    /// Whether the first-line banner or a header marker disqualifies the report.
    ///
    /// The check runs over the whole header before any field is read, so a
    /// marked report is rejected however malformed the rest of it is.
    ///
    fn is_disqualified(&self, text: &str) -> bool {
        let banner = self
            .layout
            .preamble
            .as_ref()
            .and_then(|preamble| preamble.banner);
        if let (Some(banner), Some(first)) = (banner, text.lines().next()) {
            if first.contains(banner) {
                return true;
            }
        }

        text.lines()
            .take_while(|line| !line.starts_with(self.layout.header_terminator))
            .any(|line| self.layout.is_disqualification(line))
    }

    ///
    /// Consumes the preamble and the rest of the header.
    ///
    fn parse_header(&self, lines: &mut LineStream) -> Result<Header, Error> {
        let mut header = Header::default();

        if let Some(preamble) = self.layout.preamble.as_ref() {
            lines
                .next()
                .ok_or_else(|| self.unexpected_end(Self::SECTION_HEADER))?;
            if preamble.machine_line {
                header.machine = lines.next().map(|line| line.trim().to_owned());
            }
            header.availability = lines.scan_until_field(&preamble.availability);
            header.tester = lines.scan_until_field(&preamble.tester);

            if let (Some(machine), Some(tester)) = (header.machine.as_mut(), header.tester.as_ref())
            {
                if let Some(stripped) = machine.strip_prefix(tester.as_str()) {
                    *machine = stripped.trim().to_owned();
                }
            }
        }

        lines
            .find(|line| line.starts_with(self.layout.header_terminator))
            .ok_or_else(|| self.unexpected_end(Self::SECTION_HEADER))?;

        Ok(header)
    }

    ///
    /// Resolves a text field from its layout source.
    ///
    fn field<F>(
        &self,
        source: Field,
        preamble: (&'static str, Option<String>),
        properties: &PropertyTable,
        companion: &mut Option<Companion>,
        from_companion: F,
    ) -> Result<String, Error>
    where
        F: Fn(&Companion) -> Option<String>,
    {
        match source {
            Field::Preamble => {
                let (name, value) = preamble;
                value.ok_or_else(|| self.missing(name))
            }
            Field::Property(key) => self.require(properties, key).map(str::to_owned),
            Field::PropertyOrCompanion(key) => {
                if let Some(value) = properties.get(key) {
                    return Ok(value.to_owned());
                }
                if companion.is_none() {
                    let path = Companion::path_for(self.path);
                    *companion = Some(Companion::try_from(path.as_path())?);
                }
                companion
                    .as_ref()
                    .and_then(from_companion)
                    .ok_or_else(|| self.missing(key))
            }
        }
    }

    ///
    /// Returns a required property.
    ///
    fn require<'t>(&self, properties: &'t PropertyTable, key: &str) -> Result<&'t str, Error> {
        properties.get(key).ok_or_else(|| self.missing(key))
    }

    ///
    /// Extracts a score column.
    ///
    fn score(&self, line: &str, range: std::ops::Range<usize>) -> Score {
        Score::new(scan::column(line, range))
    }

    fn missing(&self, key: &str) -> Error {
        Error::MissingRequiredField {
            path: self.path.to_path_buf(),
            key: key.to_owned(),
        }
    }

    fn unexpected_end(&self, section: &'static str) -> Error {
        Error::UnexpectedEnd {
            path: self.path.to_path_buf(),
            section,
        }
    }
}

///
/// Parses the report at `path` in the given dialect.
///
pub fn parse(path: PathBuf, dialect: Dialect) -> Result<Outcome, Error> {
    Parser::new(path.as_path(), dialect).parse_file()
}
