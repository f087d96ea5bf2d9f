//! Property-based tests using `proptest` for core invariant validation.
//!
//! Covered properties:
//!
//! 1. **Constant product** — `reserve_native * reserve_token` never
//!    decreases across any swap.
//! 2. **Round trip** — provisioning then withdrawing the same shares
//!    never returns more than was provisioned.
//! 3. **Lowest-ratio matching** — a deposit never incorporates more of
//!    either asset than was supplied, and never mints zero shares.
//! 4. **Over-burn safety** — burning more than held always fails and
//!    leaves the pool untouched.
//! 5. **Quote consistency** — `quote` always equals the output of the
//!    swap that follows it.
//! 6. **Conservation** — payouts never exceed reserves, and the pool is
//!    empty exactly when the share supply is zero.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::domain::{Address, Amount, Shares, SwapDirection};
use crate::error::AmmError;
use crate::math;
use crate::pool::Pool;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn provider() -> Address {
    Address::from_bytes([1u8; 20])
}

fn other() -> Address {
    Address::from_bytes([2u8; 20])
}

fn funded_pool(native: u128, token: u128) -> Pool {
    let mut pool = Pool::new();
    let Ok(_) = pool.provision(Amount::new(native), Amount::new(token), provider()) else {
        panic!("valid first provision");
    };
    pool
}

/// Reserve-scale strategy: large enough to exercise wide arithmetic,
/// small enough to keep shrinking fast.
fn reserve() -> impl Strategy<Value = u128> {
    1_000u128..1_000_000_000_000
}

fn trade() -> impl Strategy<Value = u128> {
    1u128..1_000_000_000
}

fn direction() -> impl Strategy<Value = SwapDirection> {
    prop_oneof![
        Just(SwapDirection::NativeForToken),
        Just(SwapDirection::TokenForNative),
    ]
}

proptest! {
    // -- 1. constant product -------------------------------------------------

    #[test]
    fn constant_product_never_decreases(
        native in reserve(),
        token in reserve(),
        amounts in prop::collection::vec(trade(), 1..20),
        dirs in prop::collection::vec(direction(), 20),
    ) {
        let mut pool = funded_pool(native, token);
        let mut k = math::full_mul(pool.reserve_native().get(), pool.reserve_token().get());
        for (amount, dir) in amounts.iter().zip(dirs.iter()) {
            // tiny pools can legitimately refuse a draining swap
            if pool.swap(*dir, Amount::new(*amount)).is_ok() {
                let k_new = math::full_mul(
                    pool.reserve_native().get(),
                    pool.reserve_token().get(),
                );
                prop_assert!(k_new >= k, "k decreased from {k} to {k_new}");
                k = k_new;
            }
        }
    }

    // -- 2. round trip ----------------------------------------------------------

    #[test]
    fn round_trip_never_profits(
        native in reserve(),
        token in reserve(),
        extra_native in trade(),
        extra_token in trade(),
    ) {
        let mut pool = funded_pool(native, token);
        let Ok(minted) = pool.provision(
            Amount::new(extra_native),
            Amount::new(extra_token),
            other(),
        ) else {
            // too small to match the ratio; nothing to check
            return Ok(());
        };

        let Ok(withdrawn) = pool.withdraw(minted.shares_minted(), other()) else {
            panic!("minted shares must be burnable");
        };
        prop_assert!(withdrawn.native_out() <= minted.native_used());
        prop_assert!(withdrawn.token_out() <= minted.token_used());
    }

    #[test]
    fn sole_provider_round_trip_is_exact(native in reserve(), token in reserve()) {
        let mut pool = Pool::new();
        let Ok(minted) = pool.provision(Amount::new(native), Amount::new(token), provider())
        else {
            panic!("valid first provision");
        };
        let Ok(withdrawn) = pool.withdraw(minted.shares_minted(), provider()) else {
            panic!("full burn must succeed");
        };
        prop_assert_eq!(withdrawn.native_out(), Amount::new(native));
        prop_assert_eq!(withdrawn.token_out(), Amount::new(token));
        prop_assert!(pool.is_empty());
    }

    // -- 3. lowest-ratio matching -------------------------------------------------

    #[test]
    fn deposit_never_absorbs_more_than_supplied(
        native in reserve(),
        token in reserve(),
        add_native in trade(),
        add_token in trade(),
    ) {
        let mut pool = funded_pool(native, token);
        match pool.provision(Amount::new(add_native), Amount::new(add_token), other()) {
            Ok(outcome) => {
                prop_assert!(outcome.native_used() <= Amount::new(add_native));
                prop_assert!(outcome.token_used() <= Amount::new(add_token));
                prop_assert!(!outcome.shares_minted().is_zero());
            }
            Err(AmmError::InvalidAmount(_)) => {
                // deposit too small for the current ratio
            }
            Err(e) => prop_assert!(false, "unexpected error: {e}"),
        }
    }

    // -- 4. over-burn safety --------------------------------------------------------

    #[test]
    fn overburn_always_fails_cleanly(
        native in reserve(),
        token in reserve(),
        excess in 1u128..1_000_000,
    ) {
        let mut pool = funded_pool(native, token);
        let held = pool.share_balance_of(&provider());
        let snapshot = pool.clone();

        let Some(too_many) = held.checked_add(&Shares::new(excess)) else {
            return Ok(());
        };
        let result = pool.withdraw(too_many, provider());
        prop_assert_eq!(result, Err(AmmError::InsufficientShares));
        prop_assert_eq!(pool, snapshot);
    }

    // -- 5. quote consistency ---------------------------------------------------------

    #[test]
    fn quote_predicts_swap_exactly(
        native in reserve(),
        token in reserve(),
        amount in trade(),
        dir in direction(),
    ) {
        let mut pool = funded_pool(native, token);
        let quoted = pool.quote(dir, Amount::new(amount));
        let swapped = pool.swap(dir, Amount::new(amount));
        match (quoted, swapped) {
            (Ok(q), Ok(s)) => prop_assert_eq!(q, s.amount_out()),
            (Err(eq), Err(es)) => prop_assert_eq!(eq, es),
            (q, s) => prop_assert!(false, "quote/swap diverged: {q:?} vs {s:?}"),
        }
    }

    // -- 6. conservation ---------------------------------------------------------------

    #[test]
    fn payouts_never_exceed_reserves(
        native in reserve(),
        token in reserve(),
        burn_fraction in 1u128..=100,
    ) {
        let mut pool = funded_pool(native, token);
        let held = pool.share_balance_of(&provider());
        let burn = Shares::new((held.get() * burn_fraction / 100).max(1));
        let reserve_native = pool.reserve_native();
        let reserve_token = pool.reserve_token();

        let Ok(withdrawn) = pool.withdraw(burn, provider()) else {
            panic!("partial burn must succeed");
        };
        prop_assert!(withdrawn.native_out() <= reserve_native);
        prop_assert!(withdrawn.token_out() <= reserve_token);

        // empty-or-fully-funded invariant
        prop_assert_eq!(
            pool.total_shares().is_zero(),
            pool.reserve_native().is_zero() && pool.reserve_token().is_zero()
        );
    }
}
