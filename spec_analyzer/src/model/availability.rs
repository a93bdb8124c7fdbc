//!
//! The hardware availability dates.
//!

use chrono::NaiveDate;

///
/// Normalizes a `Mon-YY` availability into `Mon-YYYY`.
///
/// Anything else is passed through unchanged.
///
pub fn normalize(text: &str) -> String {
    match NaiveDate::parse_from_str(format!("01-{text}").as_str(), "%d-%b-%y") {
        Ok(date) if is_two_digit_year(text) => date.format("%b-%Y").to_string(),
        _ => text.to_owned(),
    }
}

///
/// Parses a `Mon-YYYY` availability into the first day of that month.
///
pub fn parse(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(format!("01-{}", text.trim()).as_str(), "%d-%b-%Y").ok()
}

///
/// Whether the text ends in exactly two year digits after the dash.
///
fn is_two_digit_year(text: &str) -> bool {
    text.rsplit_once('-')
        .map(|(_, year)| year.len() == 2 && year.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false)
}
