//!
//! The forward-only report line stream.
//!

///
/// The forward-only report line stream.
///
/// Every parser state consumes lines from the same stream, so a scan that
/// runs to the end leaves nothing for the later states.
///
#[derive(Debug, Clone)]
pub struct LineStream<'a> {
    /// The remaining lines.
    lines: std::str::Lines<'a>,
}

impl<'a> LineStream<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
        }
    }

    ///
    /// Consumes lines until `pattern` matches, returning every capture group trimmed.
    ///
    /// Returns `None` if the stream ends first. Groups that did not take part
    /// in the match are returned as empty strings.
    ///
    pub fn scan_until_line(&mut self, pattern: &regex::Regex) -> Option<Vec<String>> {
        for line in self.by_ref() {
            if let Some(captures) = pattern.captures(line) {
                return Some(
                    captures
                        .iter()
                        .skip(1)
                        .map(|group| {
                            group
                                .map(|group| group.as_str().trim().to_owned())
                                .unwrap_or_default()
                        })
                        .collect(),
                );
            }
        }
        None
    }

    ///
    /// Consumes lines until `pattern` matches, returning its single capture group trimmed.
    ///
    pub fn scan_until_field(&mut self, pattern: &regex::Regex) -> Option<String> {
        self.scan_until_line(pattern)
            .and_then(|groups| groups.into_iter().next())
    }
}

impl<'a> Iterator for LineStream<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next()
    }
}
