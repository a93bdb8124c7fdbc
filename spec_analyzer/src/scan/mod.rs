//!
//! The line-scan primitives shared by the report parsers.
//!


pub mod clock_speed;
pub mod error;
pub mod line_stream;

pub use self::clock_speed::extract_mhz_from_name;
pub use self::error::Error;
pub use self::line_stream::LineStream;

///
/// Decodes raw report bytes one byte per character.
///
/// The reports are fixed-column text with stray 8-bit glyphs, so byte offsets
/// must stay character offsets.
///
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| char::from(*byte)).collect()
}

///
/// Returns the trimmed text in the `start..end` character span of `line`.
///
/// Spans reaching past the end of the line are truncated, like string slicing
/// in the report tooling this format comes from.
///
pub fn column(line: &str, range: std::ops::Range<usize>) -> &str {
    let start = byte_offset(line, range.start);
    let end = byte_offset(line, range.end).max(start);
    line[start..end].trim()
}

///
/// Returns the character at the `index` position, if the line is long enough.
///
pub fn char_at(line: &str, index: usize) -> Option<char> {
    line.chars().nth(index)
}

///
/// Returns the text after the first `skip` characters.
///
pub fn skip_chars(text: &str, skip: usize) -> &str {
    &text[byte_offset(text, skip)..]
}

///
/// Converts a character index into a byte offset, clamped to the string length.
///
fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}
