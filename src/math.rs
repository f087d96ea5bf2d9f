//! Wide integer arithmetic for reserve-scale calculations.
//!
//! Reserves and amounts are `u128`, but the constant-product invariant
//! and ratio math multiply two reserve-scale values, so every
//! intermediate product is computed at 256-bit width with
//! [`primitive_types::U256`]. Results are narrowed back to `u128` only
//! when they provably fit; otherwise the operation reports overflow.

use primitive_types::U256;

use crate::domain::Rounding;

/// Full-width product of two `u128` values.
///
/// Cannot overflow: the product of two 128-bit values always fits in
/// 256 bits.
#[must_use]
pub fn full_mul(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Computes `a * b / divisor` with a 256-bit intermediate product and
/// explicit rounding.
///
/// Returns `None` if `divisor` is zero or the quotient does not fit in
/// `u128`.
#[must_use]
pub fn mul_div(a: u128, b: u128, divisor: u128, rounding: Rounding) -> Option<u128> {
    if divisor == 0 {
        return None;
    }
    let product = full_mul(a, b);
    let divisor = U256::from(divisor);
    let quotient = match rounding {
        Rounding::Down => product / divisor,
        Rounding::Up => {
            let floor = product / divisor;
            if product % divisor == U256::zero() {
                floor
            } else {
                floor + U256::one()
            }
        }
    };
    narrow(quotient)
}

/// Floor integer square root of a 256-bit value, by Newton's method.
///
/// The callers only take square roots of products of two `u128` values,
/// so the result always fits in `u128`.
#[must_use]
pub fn isqrt(n: U256) -> u128 {
    if n.is_zero() {
        return 0;
    }
    let mut x = n;
    let mut y = (x + U256::one()) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    // sqrt of a 256-bit product of u128 values is at most u128::MAX
    x.low_u128()
}

/// Narrows a `U256` to `u128`, returning `None` if it does not fit.
fn narrow(value: U256) -> Option<u128> {
    if value > U256::from(u128::MAX) {
        None
    } else {
        Some(value.low_u128())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- mul_div --------------------------------------------------------------

    #[test]
    fn mul_div_exact() {
        assert_eq!(mul_div(6, 7, 2, Rounding::Down), Some(21));
        assert_eq!(mul_div(6, 7, 2, Rounding::Up), Some(21));
    }

    #[test]
    fn mul_div_truncates_down() {
        assert_eq!(mul_div(10, 1, 3, Rounding::Down), Some(3));
    }

    #[test]
    fn mul_div_rounds_up() {
        assert_eq!(mul_div(10, 1, 3, Rounding::Up), Some(4));
    }

    #[test]
    fn mul_div_zero_divisor() {
        assert_eq!(mul_div(1, 1, 0, Rounding::Down), None);
    }

    #[test]
    fn mul_div_wide_intermediate_fits() {
        // a * b overflows u128; the quotient does not.
        let a = u128::MAX;
        assert_eq!(mul_div(a, 100, 100, Rounding::Down), Some(a));
    }

    #[test]
    fn mul_div_quotient_overflow() {
        assert_eq!(mul_div(u128::MAX, 2, 1, Rounding::Down), None);
    }

    // -- isqrt ----------------------------------------------------------------

    #[test]
    fn isqrt_zero_and_one() {
        assert_eq!(isqrt(U256::zero()), 0);
        assert_eq!(isqrt(U256::one()), 1);
    }

    #[test]
    fn isqrt_perfect_squares() {
        assert_eq!(isqrt(U256::from(4u32)), 2);
        assert_eq!(isqrt(U256::from(144u32)), 12);
        assert_eq!(isqrt(full_mul(1_000_000, 1_000_000)), 1_000_000);
    }

    #[test]
    fn isqrt_floors_between_squares() {
        assert_eq!(isqrt(U256::from(8u32)), 2);
        assert_eq!(isqrt(U256::from(99u32)), 9);
    }

    #[test]
    fn isqrt_of_max_product() {
        // sqrt((2^128 - 1)^2) = 2^128 - 1, the largest possible result.
        assert_eq!(isqrt(full_mul(u128::MAX, u128::MAX)), u128::MAX);
    }

    #[test]
    fn isqrt_ether_scale() {
        // sqrt(20e18 * 100e18) = sqrt(2000) * 1e18, floored
        let one_ether = 1_000_000_000_000_000_000u128;
        let root = isqrt(full_mul(20 * one_ether, 100 * one_ether));
        // 44.721359... e18
        assert_eq!(root, 44_721_359_549_995_793_928);
    }
}
