//! Convenience re-exports for common types and traits.
//!
//! A single import brings the frequently used items into scope:
//!
//! ```rust
//! use nova_amm::prelude::*;
//! ```

pub use crate::domain::{
    Address, Amount, ProvisionOutcome, Rounding, Shares, SwapDirection, SwapOutcome, Timestamp,
    WithdrawOutcome,
};
pub use crate::error::{AmmError, Result};
pub use crate::ledger::{InMemoryToken, ManualClock, TimeSource, TokenLedger};
pub use crate::pool::Pool;
pub use crate::router::{LiquidityAdded, Router};
