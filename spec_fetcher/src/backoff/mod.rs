//!
//! The exponential retry delay.
//!


use std::time::Duration;

///
/// The exponential retry delay.
///
/// Yields the initial delay, then doubles it on every step without bound,
/// saturating at the largest representable duration.
///
#[derive(Debug, Clone)]
pub struct Backoff {
    /// The next delay.
    delay: Duration,
}

impl Backoff {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(initial_delay: Duration) -> Self {
        Self {
            delay: initial_delay,
        }
    }
}

impl Iterator for Backoff {
    type Item = Duration;

    fn next(&mut self) -> Option<Self::Item> {
        let delay = self.delay;
        self.delay = delay.saturating_mul(2);
        Some(delay)
    }
}
