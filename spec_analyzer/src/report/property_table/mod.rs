//!
//! The property table extractor.
//!


pub mod format;

use std::collections::BTreeMap;

use crate::scan;

use self::format::Format;

///
/// The label to description map of a `HARDWARE` / `SOFTWARE` block.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropertyTable {
    /// The accumulated descriptions by label.
    properties: BTreeMap<String, String>,
}

impl PropertyTable {
    ///
    /// Consumes lines up to the format's end marker, accumulating the properties.
    ///
    /// A line with a colon at the label column starts a new label. The text from
    /// the description column onward is appended to the current label, so
    /// descriptions wrapped onto unlabeled lines are joined with a space.
    ///
    pub fn extract<'a, I>(lines: I, format: &Format) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::default();
        let mut label = String::new();

        for line in lines {
            let trimmed = line.trim();
            if format
                .section_headers
                .iter()
                .any(|header| *header == trimmed)
            {
                continue;
            }
            if trimmed == format.end_marker {
                break;
            }

            if scan::char_at(line, format.label_column) == Some(':') {
                label = scan::column(line, 0..format.label_column).to_owned();
            }
            let description = scan::skip_chars(line, format.description_column).trim();
            if !label.is_empty() && !description.is_empty() {
                table.append(label.as_str(), description);
            }
        }

        table
    }

    ///
    /// Returns the description of `label`.
    ///
    pub fn get(&self, label: &str) -> Option<&str> {
        self.properties.get(label).map(String::as_str)
    }

    ///
    /// Appends a description fragment to a label.
    ///
    fn append(&mut self, label: &str, fragment: &str) {
        match self.properties.get_mut(label) {
            Some(description) => {
                description.push(' ');
                description.push_str(fragment);
            }
            None => {
                self.properties
                    .insert(label.to_owned(), fragment.to_owned());
            }
        }
    }
}
