//! Outcome records produced by pool and router operations.

use core::fmt;

use super::{Amount, Shares};

/// The outcome of a swap: amounts exchanged and the fee retained by the
/// pool.
///
/// `fee` is the portion of the raw constant-product output that stayed
/// in the pool; `amount_out` is what actually left it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct SwapOutcome {
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapOutcome {
    /// Creates a new swap outcome.
    pub const fn new(amount_in: Amount, amount_out: Amount, fee: Amount) -> Self {
        Self {
            amount_in,
            amount_out,
            fee,
        }
    }

    /// Returns the input amount absorbed by the pool.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount that left the pool.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the fee retained in the output reserve.
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapOutcome(in={}, out={}, fee={})",
            self.amount_in, self.amount_out, self.fee
        )
    }
}

/// The outcome of a liquidity provision.
///
/// `native_used` and `token_used` are the matched pair actually
/// incorporated into reserves; anything supplied beyond them was not
/// absorbed and must be returned to the depositor by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct ProvisionOutcome {
    shares_minted: Shares,
    native_used: Amount,
    token_used: Amount,
}

impl ProvisionOutcome {
    /// Creates a new provision outcome.
    pub const fn new(shares_minted: Shares, native_used: Amount, token_used: Amount) -> Self {
        Self {
            shares_minted,
            native_used,
            token_used,
        }
    }

    /// Returns the shares minted to the provider.
    pub const fn shares_minted(&self) -> Shares {
        self.shares_minted
    }

    /// Returns the native amount incorporated into reserves.
    pub const fn native_used(&self) -> Amount {
        self.native_used
    }

    /// Returns the token amount incorporated into reserves.
    pub const fn token_used(&self) -> Amount {
        self.token_used
    }
}

/// The outcome of a share withdrawal: both proportional legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct WithdrawOutcome {
    native_out: Amount,
    token_out: Amount,
}

impl WithdrawOutcome {
    /// Creates a new withdrawal outcome.
    pub const fn new(native_out: Amount, token_out: Amount) -> Self {
        Self {
            native_out,
            token_out,
        }
    }

    /// Returns the native leg paid out.
    pub const fn native_out(&self) -> Amount {
        self.native_out
    }

    /// Returns the token leg paid out.
    pub const fn token_out(&self) -> Amount {
        self.token_out
    }
}
