//! Unified error type for the AMM core.
//!
//! Every fallible operation in the crate returns [`AmmError`]. Failures
//! are terminal for the call that raised them: the core performs no
//! retries, and a failed Router operation leaves no partial state behind.

use thiserror::Error;

use crate::domain::{Amount, Timestamp};

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Errors raised by pool and router operations.
///
/// The taxonomy is deliberately small: each variant names a distinct
/// caller-visible failure so the consumer can decide whether to resubmit
/// with adjusted parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmmError {
    /// An input amount is zero or otherwise unusable.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A share burn or transfer exceeds the holder's balance.
    #[error("insufficient shares for requested burn or transfer")]
    InsufficientShares,

    /// A token-leg transfer exceeds the sender's ledger balance.
    #[error("insufficient token balance for transfer")]
    InsufficientBalance,

    /// A swap or withdrawal was attempted against reserves that cannot
    /// satisfy it (empty pool, or the swap would drain one side).
    #[error("insufficient reserves to satisfy the operation")]
    InsufficientReserves,

    /// Realized output fell below the caller's minimum bound.
    #[error("slippage exceeded: realized {realized} below minimum {minimum}")]
    SlippageExceeded {
        /// The caller-supplied floor.
        minimum: Amount,
        /// The output the pool actually produced.
        realized: Amount,
    },

    /// The call arrived after its deadline.
    #[error("deadline expired: now {now} is past {deadline}")]
    Expired {
        /// Current time reported by the time source.
        now: Timestamp,
        /// The caller-supplied deadline.
        deadline: Timestamp,
    },

    /// Checked arithmetic failed. All arithmetic in the crate is checked;
    /// nothing panics or wraps.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),
}
