//! # Nova AMM
//!
//! A constant-product automated-market-maker core: liquidity
//! provisioning with proportional share minting and burning, `x · y = k`
//! swap pricing with a 1% fee on output, and deadline/slippage-bounded
//! execution — all in exact, checked integer arithmetic.
//!
//! The crate is the accounting engine only. Wallets, UIs, and
//! transaction submission live elsewhere and consume this core through
//! the [`Router`](router::Router) API and the read-only pool getters.
//!
//! # Design Points
//!
//! - **Observed deltas, not requested amounts.** Token transfers may be
//!   taxed in flight, so the [`TokenLedger`](ledger::TokenLedger)
//!   interface reports what the recipient actually received and every
//!   ratio computation consumes that value.
//! - **Lowest-ratio provisioning.** A deposit never moves the reserve
//!   ratio: the over-supplied side of a mismatched deposit is matched
//!   down and refunded to the depositor.
//! - **Fee on output.** Swaps deduct `floor(raw_out / 100)` from the
//!   constant-product output; the fee stays in the pool, so the product
//!   of the reserves never decreases.
//! - **All-or-nothing calls.** A failed router operation — expired
//!   deadline, slippage, insufficient shares or balance — leaves no
//!   partial effect.
//!
//! # Quick Start
//!
//! ```rust
//! use nova_amm::domain::{Address, Amount, Timestamp};
//! use nova_amm::ledger::{InMemoryToken, ManualClock};
//! use nova_amm::router::Router;
//!
//! let lp = Address::from_bytes([1u8; 20]);
//! let trader = Address::from_bytes([2u8; 20]);
//! let pool_account = Address::from_bytes([0xaa; 20]);
//!
//! let mut token = InMemoryToken::new();
//! token.mint(lp, Amount::new(1_000_000));
//! token.mint(trader, Amount::new(50_000));
//!
//! let clock = ManualClock::new(Timestamp::new(0));
//! let mut router = Router::new(token, clock, pool_account);
//!
//! // Fund the pool: 20_000 native against 100_000 token.
//! let added = router.add_liquidity(
//!     lp,
//!     Amount::new(20_000),
//!     Amount::new(100_000),
//!     lp,
//!     Timestamp::new(3_600),
//! )?;
//! assert!(!added.shares_minted().is_zero());
//!
//! // Sell 5_000 tokens for the native asset.
//! let swapped = router.swap_token_for_native(
//!     trader,
//!     Amount::new(5_000),
//!     trader,
//!     Amount::ZERO,
//!     Timestamp::new(3_600),
//! )?;
//! assert!(!swapped.amount_out().is_zero());
//! # Ok::<(), nova_amm::error::AmmError>(())
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`Address`](domain::Address), outcome records |
//! | [`pool`]   | The constant-product [`Pool`](pool::Pool): reserves, shares, swaps |
//! | [`router`] | Deadline/slippage-guarded [`Router`](router::Router) façade |
//! | [`ledger`] | External interfaces ([`TokenLedger`](ledger::TokenLedger), [`TimeSource`](ledger::TimeSource)) and in-memory implementations |
//! | [`math`]   | 256-bit-intermediate `mul_div` and integer square root |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod router;

#[cfg(test)]
mod proptest_properties;
