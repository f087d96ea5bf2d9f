//! Explicit rounding direction for integer division.

/// Specifies the rounding direction for division on domain types.
///
/// All division in the core takes an explicit `Rounding` parameter so
/// truncation choices are visible at every call site. Payouts and share
/// mints round down (in favour of the pool); nothing in this crate
/// currently rounds up, but the direction stays explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
