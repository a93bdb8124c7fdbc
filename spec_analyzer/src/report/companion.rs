//!
//! The companion HTML page of an oldest-dialect report.
//!

use std::path::Path;
use std::path::PathBuf;

use super::error::Error;

lazy_static::lazy_static! {
    /// The hardware availability table cell.
    static ref HARDWARE_AVAILABILITY: regex::Regex =
        regex::Regex::new(r"Hardware Avail:\s+<TD align=left>([^\s]+)\s").expect("Always valid");

    /// The tester table cell, running to the end of its line.
    static ref TESTER: regex::Regex =
        regex::Regex::new(r"(?m)Tested By:\s+<TD align=left>(.+)$").expect("Always valid");
}

///
/// The companion HTML page sharing the report's base name.
///
/// Old text reports may omit the availability and tester fields that the
/// HTML rendition of the same submission still carries.
///
#[derive(Debug, Clone)]
pub struct Companion {
    /// The page text.
    text: String,
}

impl Companion {
    /// The companion page extension.
    pub const EXTENSION: &'static str = "html";

    ///
    /// Returns the companion page path of the report at `path`.
    ///
    pub fn path_for(path: &Path) -> PathBuf {
        path.with_extension(Self::EXTENSION)
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn new(text: String) -> Self {
        Self { text }
    }

    ///
    /// The hardware availability cell.
    ///
    pub fn hardware_availability(&self) -> Option<String> {
        Self::capture(&HARDWARE_AVAILABILITY, self.text.as_str())
    }

    ///
    /// The tester cell.
    ///
    pub fn tester(&self) -> Option<String> {
        Self::capture(&TESTER, self.text.as_str())
    }

    ///
    /// Returns the first capture group of `pattern`, trimmed.
    ///
    fn capture(pattern: &regex::Regex, text: &str) -> Option<String> {
        pattern
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|group| group.as_str().trim().to_owned())
    }
}

impl TryFrom<&Path> for Companion {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let bytes = std::fs::read(path).map_err(|error| Error::CompanionReading {
            error,
            path: path.to_path_buf(),
        })?;
        Ok(Self::new(crate::scan::decode(bytes.as_slice())))
    }
}
