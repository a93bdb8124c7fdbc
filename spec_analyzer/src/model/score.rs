//!
//! The benchmark score.
//!

///
/// A benchmark score exactly as printed in its column.
///
/// Reports print placeholders such as `--` or `NC` in place of missing peak
/// runs, so the text is kept and parsed on demand.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(String);

impl Score {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    ///
    /// The score text.
    ///
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    ///
    /// The numeric value, if the text is a finite number.
    ///
    pub fn value(&self) -> Option<f64> {
        self.0
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
