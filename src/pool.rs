//! Constant-product liquidity pool with fee-on-output swaps.
//!
//! The pool owns the reserve balances of two assets (a native asset and
//! a token), mints and burns liquidity shares representing proportional
//! ownership, and prices swaps by the constant product `x · y = k`.
//!
//! # Swap Algorithm
//!
//! 1. `raw_out = reserve_out − floor(k / (reserve_in + amount_in))`
//! 2. `fee = floor(raw_out / 100)` (1%, retained in the output reserve)
//! 3. `amount_out = raw_out − fee`
//! 4. `reserve_in += amount_in`, `reserve_out -= amount_out`
//!
//! The fee is deducted from the **output**, so `reserve_out` decreases
//! by less than the raw constant-product output and `k` never decreases
//! across swaps.
//!
//! # Invariants
//!
//! - The pool is either empty or fully funded:
//!   `reserve_native == 0 ⟺ reserve_token == 0 ⟺ total_shares == 0`.
//! - `total_shares` equals the sum of all entries in the share balance
//!   map; it only changes through [`Pool::provision`] and
//!   [`Pool::withdraw`].
//! - Provisioning only ever incorporates a ratio-matched pair of
//!   amounts, so deposits cannot move the reserve ratio.

use std::collections::BTreeMap;

use primitive_types::U256;

use crate::domain::{
    Address, Amount, ProvisionOutcome, Rounding, Shares, SwapDirection, SwapOutcome,
    WithdrawOutcome,
};
use crate::error::{AmmError, Result};
use crate::math;

/// Divisor for the swap fee: 1% of the raw output stays in the pool.
const FEE_DENOMINATOR: u128 = 100;

/// A constant-product pool holding a native-asset reserve and a token
/// reserve, with share-based proportional ownership.
///
/// The pool is a single owned record: the hosting dispatch layer (here,
/// the [`Router`](crate::router::Router)) holds one instance and
/// serializes access through exclusive references. The pool itself never
/// moves asset legs — it accounts for amounts its caller has already
/// observed, which is what makes transfer-taxed tokens safe: callers
/// report the *received* delta, never the requested amount.
///
/// # Examples
///
/// ```
/// use nova_amm::domain::{Address, Amount, Shares, SwapDirection};
/// use nova_amm::pool::Pool;
///
/// let provider = Address::from_bytes([1u8; 20]);
/// let mut pool = Pool::new();
///
/// let minted = pool.provision(Amount::new(20), Amount::new(100), provider)?;
/// assert_eq!(minted.shares_minted(), Shares::new(44)); // floor(sqrt(2000))
///
/// let swap = pool.swap(SwapDirection::TokenForNative, Amount::new(5))?;
/// assert_eq!(swap.amount_out(), Amount::new(1));
/// # Ok::<(), nova_amm::error::AmmError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pool {
    reserve_native: Amount,
    reserve_token: Amount,
    total_shares: Shares,
    share_balances: BTreeMap<Address, Shares>,
}

impl Pool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the native-asset reserve.
    #[must_use]
    pub const fn reserve_native(&self) -> Amount {
        self.reserve_native
    }

    /// Returns the token reserve (post-tax amounts actually received).
    #[must_use]
    pub const fn reserve_token(&self) -> Amount {
        self.reserve_token
    }

    /// Returns the outstanding share supply.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns `owner`'s share balance.
    #[must_use]
    pub fn share_balance_of(&self, owner: &Address) -> Shares {
        self.share_balances.get(owner).copied().unwrap_or(Shares::ZERO)
    }

    /// Returns `true` if the pool holds no reserves and no shares exist.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    /// Adds liquidity and mints shares to `provider`.
    ///
    /// `token_received` must be the amount the pool's account actually
    /// received (the observed balance delta), not the amount the
    /// depositor requested to send.
    ///
    /// The first deposit mints `floor(sqrt(native_in * token_received))`
    /// shares and funds the reserves exactly. Subsequent deposits accept
    /// only the lowest-ratio matched pair: the over-supplied side is
    /// reported back through [`ProvisionOutcome`] and must be returned
    /// to the depositor by the caller. Minted shares follow the native
    /// ratio canonically: `floor(total_shares * native_used /
    /// reserve_native)`, evaluated against pre-update reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if either input is zero or the
    ///   matched pair is too small to mint a share.
    /// - [`AmmError::Overflow`] if a reserve or the share supply would
    ///   overflow.
    pub fn provision(
        &mut self,
        native_in: Amount,
        token_received: Amount,
        provider: Address,
    ) -> Result<ProvisionOutcome> {
        if native_in.is_zero() || token_received.is_zero() {
            return Err(AmmError::InvalidAmount("provision requires both assets"));
        }

        if self.is_empty() {
            let minted = Shares::new(math::isqrt(math::full_mul(
                native_in.get(),
                token_received.get(),
            )));
            // native_in >= 1 and token_received >= 1, so minted >= 1
            self.reserve_native = native_in;
            self.reserve_token = token_received;
            self.total_shares = minted;
            self.credit_shares(provider, minted)?;
            return Ok(ProvisionOutcome::new(minted, native_in, token_received));
        }

        let (native_used, token_used) = self.match_contribution(native_in, token_received)?;
        if native_used.is_zero() || token_used.is_zero() {
            return Err(AmmError::InvalidAmount(
                "deposit too small to match the reserve ratio",
            ));
        }

        let minted = math::mul_div(
            self.total_shares.get(),
            native_used.get(),
            self.reserve_native.get(),
            Rounding::Down,
        )
        .map(Shares::new)
        .ok_or(AmmError::Overflow("share mint calculation"))?;
        if minted.is_zero() {
            return Err(AmmError::InvalidAmount("deposit too small to mint shares"));
        }

        self.reserve_native = self
            .reserve_native
            .checked_add(&native_used)
            .ok_or(AmmError::Overflow("native reserve on provision"))?;
        self.reserve_token = self
            .reserve_token
            .checked_add(&token_used)
            .ok_or(AmmError::Overflow("token reserve on provision"))?;
        self.total_shares = self
            .total_shares
            .checked_add(&minted)
            .ok_or(AmmError::Overflow("share supply on provision"))?;
        self.credit_shares(provider, minted)?;

        Ok(ProvisionOutcome::new(minted, native_used, token_used))
    }

    /// Burns `shares` from `owner` and pays out both reserve legs
    /// proportionally, rounded down.
    ///
    /// Burning the entire supply drains both reserves to exactly zero,
    /// re-establishing the empty-pool state.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `shares` is zero.
    /// - [`AmmError::InsufficientShares`] if `shares` exceeds `owner`'s
    ///   balance; the whole call fails, nothing is burned.
    pub fn withdraw(&mut self, shares: Shares, owner: Address) -> Result<WithdrawOutcome> {
        if shares.is_zero() {
            return Err(AmmError::InvalidAmount("cannot burn zero shares"));
        }
        let balance = self.share_balance_of(&owner);
        if shares > balance {
            return Err(AmmError::InsufficientShares);
        }

        // balance > 0 implies total_shares > 0
        let native_out = shares
            .mul_div(&self.reserve_native, &self.total_shares, Rounding::Down)
            .ok_or(AmmError::Overflow("native payout calculation"))?;
        let token_out = shares
            .mul_div(&self.reserve_token, &self.total_shares, Rounding::Down)
            .ok_or(AmmError::Overflow("token payout calculation"))?;

        let remaining = balance
            .checked_sub(&shares)
            .ok_or(AmmError::InsufficientShares)?;
        if remaining.is_zero() {
            self.share_balances.remove(&owner);
        } else {
            self.share_balances.insert(owner, remaining);
        }
        self.total_shares = self
            .total_shares
            .checked_sub(&shares)
            .ok_or(AmmError::InsufficientShares)?;
        self.reserve_native = self
            .reserve_native
            .checked_sub(&native_out)
            .ok_or(AmmError::Overflow("native reserve on withdraw"))?;
        self.reserve_token = self
            .reserve_token
            .checked_sub(&token_out)
            .ok_or(AmmError::Overflow("token reserve on withdraw"))?;

        Ok(WithdrawOutcome::new(native_out, token_out))
    }

    /// Executes a constant-product swap with the 1% fee applied to the
    /// raw output.
    ///
    /// `amount_in` must be the amount the pool actually received. The
    /// pool does not take a minimum-output bound — slippage enforcement
    /// belongs to the caller, which can compare against [`Pool::quote`].
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientReserves`] if the pool is empty or the
    ///   swap would drain the output reserve entirely.
    /// - [`AmmError::Overflow`] if the input reserve would overflow.
    pub fn swap(&mut self, direction: SwapDirection, amount_in: Amount) -> Result<SwapOutcome> {
        let (amount_out, fee, reserve_in_new, reserve_out_new) =
            self.compute_swap(direction, amount_in)?;

        match direction {
            SwapDirection::NativeForToken => {
                self.reserve_native = reserve_in_new;
                self.reserve_token = reserve_out_new;
            }
            SwapDirection::TokenForNative => {
                self.reserve_token = reserve_in_new;
                self.reserve_native = reserve_out_new;
            }
        }

        Ok(SwapOutcome::new(amount_in, amount_out, fee))
    }

    /// Returns the output a swap of `amount_in` would produce right now,
    /// without mutating any state.
    ///
    /// Computes exactly the same formula as [`Pool::swap`], fee
    /// included. Used by callers for pre-trade estimation and slippage
    /// floors.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Pool::swap`].
    pub fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<Amount> {
        let (amount_out, _, _, _) = self.compute_swap(direction, amount_in)?;
        Ok(amount_out)
    }

    /// Moves `shares` between holders. Shares are fungible; any balance
    /// can be transferred in part.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `shares` is zero.
    /// - [`AmmError::InsufficientShares`] if `from` holds fewer than
    ///   `shares`.
    pub fn transfer_shares(&mut self, from: &Address, to: Address, shares: Shares) -> Result<()> {
        if shares.is_zero() {
            return Err(AmmError::InvalidAmount("cannot transfer zero shares"));
        }
        let from_balance = self.share_balance_of(from);
        let remaining = from_balance
            .checked_sub(&shares)
            .ok_or(AmmError::InsufficientShares)?;
        if *from == to {
            return Ok(());
        }
        if remaining.is_zero() {
            self.share_balances.remove(from);
        } else {
            self.share_balances.insert(*from, remaining);
        }
        self.credit_shares(to, shares)?;
        Ok(())
    }

    /// Computes the ratio-matched contribution pair for a subsequent
    /// deposit: the lowest-ratio pair of the two supplied amounts.
    ///
    /// If the token leg covers the ratio implied by `native_in`, the
    /// native side is used in full and the token side is capped;
    /// otherwise the native side is capped to what the received token
    /// amount supports.
    fn match_contribution(
        &self,
        native_in: Amount,
        token_received: Amount,
    ) -> Result<(Amount, Amount)> {
        let token_matched = native_in
            .mul_div(&self.reserve_token, &self.reserve_native, Rounding::Down)
            .ok_or(AmmError::Overflow("token ratio match"))?;
        if token_matched <= token_received {
            Ok((native_in, token_matched))
        } else {
            let native_matched = token_received
                .mul_div(&self.reserve_native, &self.reserve_token, Rounding::Down)
                .ok_or(AmmError::Overflow("native ratio match"))?;
            Ok((native_matched, token_received))
        }
    }

    /// Shared pricing for [`Pool::swap`] and [`Pool::quote`].
    ///
    /// Returns `(amount_out, fee, reserve_in_new, reserve_out_new)`.
    fn compute_swap(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<(Amount, Amount, Amount, Amount)> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidAmount("swap requires a non-zero input"));
        }
        if self.is_empty() {
            return Err(AmmError::InsufficientReserves);
        }

        let (reserve_in, reserve_out) = match direction {
            SwapDirection::NativeForToken => (self.reserve_native, self.reserve_token),
            SwapDirection::TokenForNative => (self.reserve_token, self.reserve_native),
        };

        let k = math::full_mul(reserve_in.get(), reserve_out.get());
        let reserve_in_new = reserve_in
            .checked_add(&amount_in)
            .ok_or(AmmError::Overflow("input reserve on swap"))?;
        // floor(k / (reserve_in + amount_in)) < reserve_out, so it fits u128
        let kept = (k / U256::from(reserve_in_new.get())).low_u128();
        let raw_out = reserve_out.get() - kept;
        if raw_out == reserve_out.get() {
            // would drain the output reserve to zero
            return Err(AmmError::InsufficientReserves);
        }

        let fee = raw_out / FEE_DENOMINATOR;
        let amount_out = Amount::new(raw_out - fee);
        let reserve_out_new = reserve_out
            .checked_sub(&amount_out)
            .ok_or(AmmError::Overflow("output reserve on swap"))?;

        Ok((amount_out, Amount::new(fee), reserve_in_new, reserve_out_new))
    }

    fn credit_shares(&mut self, owner: Address, shares: Shares) -> Result<()> {
        let balance = self.share_balance_of(&owner);
        let updated = balance
            .checked_add(&shares)
            .ok_or(AmmError::Overflow("holder share balance"))?;
        self.share_balances.insert(owner, updated);
        Ok(())
    }
}
