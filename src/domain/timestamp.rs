//! Point-in-time value used for deadline checks.

use core::fmt;

/// A timestamp in seconds, as reported by a
/// [`TimeSource`](crate::ledger::TimeSource).
///
/// The core only compares timestamps; it never produces them. A call is
/// expired when the current time is strictly greater than its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a timestamp from raw seconds.
    pub const fn new(seconds: u64) -> Self {
        Self(seconds)
    }

    /// Returns the raw seconds value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns this timestamp advanced by `seconds`, saturating at the
    /// maximum representable value.
    pub const fn saturating_add(&self, seconds: u64) -> Self {
        Self(self.0.saturating_add(seconds))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
