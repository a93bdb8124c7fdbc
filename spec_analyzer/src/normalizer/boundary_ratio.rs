//!
//! The conversion ratio between two adjacent generations.
//!

use crate::model::Dialect;

///
/// The conversion ratio between two adjacent generations.
///
/// A score of the newer generation is `ratio` times the score of the older
/// generation on the same CPU.
///
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryRatio {
    /// The older generation.
    pub older: Dialect,
    /// The newer generation.
    pub newer: Dialect,
    /// The ratio.
    pub ratio: f64,
    /// The number of CPUs measured under both generations.
    pub candidates: usize,
}

impl BoundaryRatio {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(older: Dialect, newer: Dialect, ratio: f64, candidates: usize) -> Self {
        Self {
            older,
            newer,
            ratio,
            candidates,
        }
    }
}
