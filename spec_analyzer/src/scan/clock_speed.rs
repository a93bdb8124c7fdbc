//!
//! The clock speed extraction from free-text CPU names.
//!

use super::error::Error;

lazy_static::lazy_static! {
    ///
    /// A number followed by a MHz or GHz unit, matched against lowercase text.
    ///
    static ref CLOCK_SPEED: regex::Regex =
        regex::Regex::new(r"[(/]?(\d+(?:\.\d+)?)a? ?([mg]hz)\)?").expect("Always valid");
}

/// The number of MHz in a GHz.
pub const MHZ_PER_GHZ: f64 = 1000.0;

///
/// Extracts the first clock speed embedded in `text`, in MHz.
///
/// The unit match is case-insensitive and GHz values are converted to MHz.
///
pub fn extract_mhz_from_name(text: &str) -> Result<f64, Error> {
    let lowercase = text.to_lowercase();
    let captures = CLOCK_SPEED
        .captures(lowercase.as_str())
        .ok_or_else(|| Error::NoClockSpeed {
            text: text.to_owned(),
        })?;

    let value: f64 = captures[1].parse().map_err(|_| Error::NoClockSpeed {
        text: text.to_owned(),
    })?;
    Ok(match &captures[2] {
        "ghz" => value * MHZ_PER_GHZ,
        _ => value,
    })
}
