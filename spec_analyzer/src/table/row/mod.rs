//!
//! The table row conversions.
//!

pub mod bench_record;
pub mod test_record;

///
/// A record stored as one table row.
///
pub trait Row: Sized {
    /// The header field names, in column order.
    const HEADER: &'static [&'static str];

    ///
    /// Converts the record into text fields.
    ///
    fn to_fields(&self) -> Vec<String>;

    ///
    /// Restores the record from text fields.
    ///
    fn from_fields(fields: Vec<String>) -> Result<Self, String>;
}

///
/// Checks the field count of a row.
///
pub fn check_width<R: Row>(fields: &[String]) -> Result<(), String> {
    if fields.len() != R::HEADER.len() {
        return Err(format!(
            "expected {} fields, found {}",
            R::HEADER.len(),
            fields.len()
        ));
    }
    Ok(())
}
