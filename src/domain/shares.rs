//! Liquidity share quantity with checked arithmetic.

use core::fmt;

use super::{Amount, Rounding};

/// A quantity of liquidity shares representing proportional pool
/// ownership.
///
/// Shares live in the same unsigned integer domain as [`Amount`] but are
/// kept as a distinct type so share arithmetic cannot be mixed with
/// asset arithmetic by accident. Shares are fungible: any holder's
/// balance can be transferred or burned in part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Shares(u128);

impl Shares {
    /// Zero shares.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Shares` quantity from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the quantity is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `self * multiplier / divisor` through a 256-bit
    /// intermediate, yielding an [`Amount`].
    ///
    /// Used for proportional payouts: `shares * reserve / total_shares`.
    /// Returns `None` if `divisor` is zero or the quotient does not fit.
    #[must_use]
    pub fn mul_div(&self, multiplier: &Amount, divisor: &Shares, rounding: Rounding) -> Option<Amount> {
        crate::math::mul_div(self.0, multiplier.get(), divisor.0, rounding).map(Amount::new)
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
