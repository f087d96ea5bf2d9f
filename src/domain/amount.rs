//! Raw asset amount with checked arithmetic.

use core::fmt;

use super::Rounding;
use crate::math;

/// A raw asset amount in the smallest unit of either pool asset.
///
/// `Amount` carries no decimal interpretation — callers parse decimal
/// strings into base units before entering the core. All `u128` values
/// are valid amounts.
///
/// Arithmetic is checked: operations return `None` on overflow,
/// underflow, or division by zero instead of panicking. The widening
/// helper [`Amount::mul_div`] computes `self * b / divisor` through a
/// 256-bit intermediate so reserve-scale products never overflow.
///
/// # Examples
///
/// ```
/// use nova_amm::domain::{Amount, Rounding};
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(a.mul_div(&b, &Amount::new(3), Rounding::Down), Some(Amount::new(6_666)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
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

    /// Computes `self * multiplier / divisor` with a 256-bit
    /// intermediate product and explicit rounding.
    ///
    /// Returns `None` if `divisor` is zero or the quotient does not fit
    /// in `u128`.
    #[must_use]
    pub fn mul_div(&self, multiplier: &Self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        math::mul_div(self.0, multiplier.0, divisor.0, rounding).map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
