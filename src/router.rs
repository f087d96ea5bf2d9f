//! Deadline- and slippage-guarded façade over the [`Pool`].
//!
//! The router owns the pool, a [`TokenLedger`] handle for the token leg,
//! and a [`TimeSource`] for deadline checks. It translates user-facing
//! calls into pool operations: it validates the deadline first, moves
//! the token leg through the ledger (observing the post-tax received
//! amount), delegates the accounting to the pool, and enforces the
//! caller's minimum-output bound.
//!
//! The native leg is carried by value: an incoming native amount arrives
//! as a call parameter (the hosting environment has already attached
//! it), and an outgoing native amount is returned in the result record
//! for the hosting environment to pay out.
//!
//! # Atomicity
//!
//! Every operation is all-or-nothing. The router snapshots the pool and
//! ledger before applying an operation and restores the snapshot on any
//! error, so a failed call — expired deadline, slippage, insufficient
//! shares — leaves no partial effect behind.

use tracing::debug;

use crate::domain::{
    Address, Amount, Shares, SwapDirection, SwapOutcome, Timestamp, WithdrawOutcome,
};
use crate::error::{AmmError, Result};
use crate::ledger::{TimeSource, TokenLedger};
use crate::pool::Pool;

/// The result of a successful [`Router::add_liquidity`] call.
///
/// Anything the depositor supplied beyond the ratio-matched pair comes
/// back: the token excess has already been refunded through the ledger,
/// and the native excess is reported here for the hosting environment
/// to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct LiquidityAdded {
    shares_minted: Shares,
    native_refunded: Amount,
    token_refunded: Amount,
}

impl LiquidityAdded {
    /// Returns the shares credited to the recipient.
    pub const fn shares_minted(&self) -> Shares {
        self.shares_minted
    }

    /// Returns the unused native amount to return to the caller.
    pub const fn native_refunded(&self) -> Amount {
        self.native_refunded
    }

    /// Returns the token amount already refunded to the caller.
    pub const fn token_refunded(&self) -> Amount {
        self.token_refunded
    }
}

/// Stateless request/response façade enforcing deadlines and slippage
/// bounds over a single [`Pool`].
///
/// Generic over the ledger and clock so tests and simulations can plug
/// in deterministic implementations
/// ([`InMemoryToken`](crate::ledger::InMemoryToken),
/// [`ManualClock`](crate::ledger::ManualClock)).
#[derive(Debug, Clone)]
pub struct Router<L, C> {
    pool: Pool,
    ledger: L,
    clock: C,
    pool_account: Address,
}

impl<L, C> Router<L, C>
where
    L: TokenLedger + Clone,
    C: TimeSource,
{
    /// Creates a router over an empty pool.
    ///
    /// `pool_account` is the ledger account that holds the pool's token
    /// reserve; the router is its only operator.
    pub fn new(ledger: L, clock: C, pool_account: Address) -> Self {
        Self {
            pool: Pool::new(),
            ledger,
            clock,
            pool_account,
        }
    }

    /// Returns the pool for read-only inspection.
    #[must_use]
    pub const fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Returns the ledger for read-only inspection.
    #[must_use]
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Returns the ledger account holding the pool's token reserve.
    #[must_use]
    pub const fn pool_account(&self) -> Address {
        self.pool_account
    }

    /// Returns the output a swap would produce right now. Pure read;
    /// consumers derive slippage floors from it.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Pool::quote`].
    pub fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<Amount> {
        self.pool.quote(direction, amount_in)
    }

    /// Adds liquidity: pulls up to `token_desired` from `caller`,
    /// provisions the pool with the attached `native_in` and the token
    /// amount actually received, and credits the minted shares to
    /// `recipient`.
    ///
    /// The unused side of a mismatched deposit is refunded: token excess
    /// through the ledger, native excess in the returned record.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if the deadline has passed.
    /// - [`AmmError::InvalidAmount`] if either leg is zero or too small.
    /// - [`AmmError::InsufficientBalance`] if `caller` cannot fund the
    ///   token leg.
    pub fn add_liquidity(
        &mut self,
        caller: Address,
        native_in: Amount,
        token_desired: Amount,
        recipient: Address,
        deadline: Timestamp,
    ) -> Result<LiquidityAdded> {
        self.transactional(|router| {
            router.check_deadline(deadline)?;
            if native_in.is_zero() || token_desired.is_zero() {
                return Err(AmmError::InvalidAmount("liquidity requires both assets"));
            }

            let received = router
                .ledger
                .transfer(caller, router.pool_account, token_desired)?;
            if received.is_zero() {
                return Err(AmmError::InvalidAmount("no tokens received for provision"));
            }

            let outcome = router.pool.provision(native_in, received, recipient)?;

            let token_refunded = received
                .checked_sub(&outcome.token_used())
                .ok_or(AmmError::Overflow("token refund"))?;
            if !token_refunded.is_zero() {
                router
                    .ledger
                    .transfer(router.pool_account, caller, token_refunded)?;
            }
            let native_refunded = native_in
                .checked_sub(&outcome.native_used())
                .ok_or(AmmError::Overflow("native refund"))?;

            debug!(
                caller = %caller,
                recipient = %recipient,
                shares = %outcome.shares_minted(),
                "liquidity added"
            );
            Ok(LiquidityAdded {
                shares_minted: outcome.shares_minted(),
                native_refunded,
                token_refunded,
            })
        })
    }

    /// Removes liquidity: burns `shares` from `caller` and forwards both
    /// legs to `recipient` — the token leg through the ledger, the
    /// native leg in the returned record.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if the deadline has passed.
    /// - [`AmmError::InsufficientShares`] if `caller` holds fewer than
    ///   `shares`.
    pub fn remove_liquidity(
        &mut self,
        caller: Address,
        shares: Shares,
        recipient: Address,
        deadline: Timestamp,
    ) -> Result<WithdrawOutcome> {
        self.transactional(|router| {
            router.check_deadline(deadline)?;
            let outcome = router.pool.withdraw(shares, caller)?;
            if !outcome.token_out().is_zero() {
                router
                    .ledger
                    .transfer(router.pool_account, recipient, outcome.token_out())?;
            }
            debug!(caller = %caller, shares = %shares, "liquidity removed");
            Ok(outcome)
        })
    }

    /// Swaps the attached native amount for tokens, forwarding the
    /// output to `recipient` through the ledger.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if the deadline has passed.
    /// - [`AmmError::SlippageExceeded`] if the pool's output falls below
    ///   `amount_out_min`; the whole call is rolled back.
    pub fn swap_native_for_token(
        &mut self,
        native_in: Amount,
        recipient: Address,
        amount_out_min: Amount,
        deadline: Timestamp,
    ) -> Result<SwapOutcome> {
        self.transactional(|router| {
            router.check_deadline(deadline)?;
            let outcome = router.pool.swap(SwapDirection::NativeForToken, native_in)?;
            router.check_slippage(outcome.amount_out(), amount_out_min)?;
            if !outcome.amount_out().is_zero() {
                router
                    .ledger
                    .transfer(router.pool_account, recipient, outcome.amount_out())?;
            }
            debug!(recipient = %recipient, outcome = %outcome, "swapped native for token");
            Ok(outcome)
        })
    }

    /// Swaps `amount_in` tokens pulled from `caller` for the native
    /// asset, returned in the outcome record for payment to `recipient`.
    ///
    /// The pool prices the swap on the token amount it actually received
    /// (post-tax), not on `amount_in`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if the deadline has passed.
    /// - [`AmmError::InsufficientBalance`] if `caller` cannot fund the
    ///   input leg.
    /// - [`AmmError::SlippageExceeded`] if the pool's output falls below
    ///   `amount_out_min`; the whole call is rolled back.
    pub fn swap_token_for_native(
        &mut self,
        caller: Address,
        amount_in: Amount,
        recipient: Address,
        amount_out_min: Amount,
        deadline: Timestamp,
    ) -> Result<SwapOutcome> {
        self.transactional(|router| {
            router.check_deadline(deadline)?;
            let received = router
                .ledger
                .transfer(caller, router.pool_account, amount_in)?;
            let outcome = router.pool.swap(SwapDirection::TokenForNative, received)?;
            router.check_slippage(outcome.amount_out(), amount_out_min)?;
            debug!(
                caller = %caller,
                recipient = %recipient,
                outcome = %outcome,
                "swapped token for native"
            );
            Ok(outcome)
        })
    }

    /// Runs `f` against the live state, restoring the pre-call pool and
    /// ledger on any error so failed calls have no partial effect.
    fn transactional<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let pool = self.pool.clone();
        let ledger = self.ledger.clone();
        match f(self) {
            Ok(value) => Ok(value),
            Err(error) => {
                self.pool = pool;
                self.ledger = ledger;
                debug!(error = %error, "operation rolled back");
                Err(error)
            }
        }
    }

    fn check_deadline(&self, deadline: Timestamp) -> Result<()> {
        let now = self.clock.now();
        if now > deadline {
            return Err(AmmError::Expired { now, deadline });
        }
        Ok(())
    }

    fn check_slippage(&self, realized: Amount, minimum: Amount) -> Result<()> {
        if realized < minimum {
            return Err(AmmError::SlippageExceeded { minimum, realized });
        }
        Ok(())
    }
}
