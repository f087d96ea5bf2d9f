//! Fundamental domain value types used throughout the AMM core.
//!
//! All types are newtypes with checked arithmetic and validated use:
//! amounts and shares never wrap, division always names its rounding
//! direction, and operation results are first-class records.

mod address;
mod amount;
mod direction;
mod outcome;
mod rounding;
mod shares;
mod timestamp;

pub use address::Address;
pub use amount::Amount;
pub use direction::SwapDirection;
pub use outcome::{ProvisionOutcome, SwapOutcome, WithdrawOutcome};
pub use rounding::Rounding;
pub use shares::Shares;
pub use timestamp::Timestamp;
