//!
//! The performance dimension.
//!

///
/// The performance dimension measured by a benchmark suite.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    /// The integer suite.
    Integer,
    /// The floating-point suite.
    FloatingPoint,
}

impl Metric {
    /// Every metric, in processing order.
    pub const ALL: [Self; 2] = [Self::Integer, Self::FloatingPoint];
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "INT"),
            Self::FloatingPoint => write!(f, "FP"),
        }
    }
}
