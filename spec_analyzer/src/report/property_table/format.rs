//!
//! The property block layout.
//!

///
/// The property block layout of a dialect.
///
#[derive(Debug, Clone)]
pub struct Format {
    /// The lines skipped verbatim, after trimming.
    pub section_headers: &'static [&'static str],
    /// The trimmed line that ends the block.
    pub end_marker: &'static str,
    /// The column of the colon that terminates a label.
    pub label_column: usize,
    /// The column where descriptions start.
    pub description_column: usize,
}
