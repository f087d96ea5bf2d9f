//! External interfaces consumed by the router, plus in-memory
//! reference implementations.
//!
//! The core never assumes a transfer delivers what was requested: the
//! token may withhold a transfer tax. [`TokenLedger::transfer`] therefore
//! reports the amount the recipient *actually received*, and all
//! downstream ratio math consumes that observed delta.
//!
//! [`InMemoryToken`] and [`ManualClock`] are deterministic stand-ins for
//! the real token contract and block clock, used by tests, simulations,
//! and examples.

use std::collections::BTreeMap;

use crate::domain::{Address, Amount, Rounding, Timestamp};
use crate::error::{AmmError, Result};

/// Basis-point denominator for the transfer tax (10 000 = 100%).
const BPS_DENOMINATOR: u128 = 10_000;

/// A fungible-token ledger whose transfers may be taxed.
pub trait TokenLedger {
    /// Moves up to `amount` from `from` to `to` and returns the amount
    /// `to` actually received, which may be less than `amount` if the
    /// token withholds a transfer tax.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientBalance`] if `from` holds less
    /// than `amount`.
    fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> Result<Amount>;

    /// Returns `owner`'s token balance.
    fn balance_of(&self, owner: &Address) -> Amount;
}

/// A monotonically non-decreasing time source for deadline checks.
pub trait TimeSource {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}

/// In-memory token ledger with an optional transfer tax.
///
/// The tax is withheld from every transfer: the sender is debited the
/// full amount, the recipient is credited `amount - tax`. Where the
/// withheld tax goes (a treasury, a burn) is outside this core's
/// concern; the ledger simply makes it disappear from circulation.
///
/// # Examples
///
/// ```
/// use nova_amm::domain::{Address, Amount};
/// use nova_amm::ledger::{InMemoryToken, TokenLedger};
///
/// let sender = Address::from_bytes([1u8; 20]);
/// let receiver = Address::from_bytes([2u8; 20]);
///
/// let mut token = InMemoryToken::with_tax_bps(200); // 2%
/// token.mint(sender, Amount::new(1_000));
///
/// let received = token.transfer(sender, receiver, Amount::new(100))?;
/// assert_eq!(received, Amount::new(98));
/// assert_eq!(token.balance_of(&receiver), Amount::new(98));
/// # Ok::<(), nova_amm::error::AmmError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InMemoryToken {
    balances: BTreeMap<Address, Amount>,
    tax_bps: u128,
}

impl InMemoryToken {
    /// Creates a tax-free ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger withholding `tax_bps` basis points on every
    /// transfer. Values above 10 000 are clamped to 10 000 (a 100% tax).
    #[must_use]
    pub fn with_tax_bps(tax_bps: u16) -> Self {
        Self {
            balances: BTreeMap::new(),
            tax_bps: u128::from(tax_bps).min(BPS_DENOMINATOR),
        }
    }

    /// Credits `amount` to `to` out of thin air. Test/simulation setup
    /// only; saturates at the maximum balance.
    pub fn mint(&mut self, to: Address, amount: Amount) {
        let balance = self.balance_of(&to);
        let updated = balance.checked_add(&amount).unwrap_or(Amount::MAX);
        self.balances.insert(to, updated);
    }
}

impl TokenLedger for InMemoryToken {
    fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> Result<Amount> {
        if amount.is_zero() {
            return Ok(Amount::ZERO);
        }
        let from_balance = self.balance_of(&from);
        let remaining = from_balance
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientBalance)?;

        let tax = amount
            .mul_div(
                &Amount::new(self.tax_bps),
                &Amount::new(BPS_DENOMINATOR),
                Rounding::Down,
            )
            .ok_or(AmmError::Overflow("transfer tax"))?;
        let received = amount
            .checked_sub(&tax)
            .ok_or(AmmError::Overflow("post-tax amount"))?;

        self.balances.insert(from, remaining);
        let to_balance = self.balance_of(&to);
        let updated = to_balance
            .checked_add(&received)
            .ok_or(AmmError::Overflow("recipient balance"))?;
        self.balances.insert(to, updated);

        Ok(received)
    }

    fn balance_of(&self, owner: &Address) -> Amount {
        self.balances.get(owner).copied().unwrap_or(Amount::ZERO)
    }
}

/// A manually driven clock.
///
/// Time never goes backwards: [`ManualClock::advance`] is the only way
/// to move it, mirroring the monotonic time source of the hosting
/// environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ManualClock {
    now: Timestamp,
}

impl ManualClock {
    /// Creates a clock starting at `now`.
    #[must_use]
    pub const fn new(now: Timestamp) -> Self {
        Self { now }
    }

    /// Advances the clock by `seconds`.
    pub fn advance(&mut self, seconds: u64) {
        self.now = self.now.saturating_add(seconds);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Timestamp {
        self.now
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn alice() -> Address {
        Address::from_bytes([1u8; 20])
    }

    fn bob() -> Address {
        Address::from_bytes([2u8; 20])
    }

    // -- InMemoryToken -----------------------------------------------------------

    #[test]
    fn mint_and_balance() {
        let mut token = InMemoryToken::new();
        token.mint(alice(), Amount::new(500));
        assert_eq!(token.balance_of(&alice()), Amount::new(500));
        assert_eq!(token.balance_of(&bob()), Amount::ZERO);
    }

    #[test]
    fn untaxed_transfer_delivers_full_amount() {
        let mut token = InMemoryToken::new();
        token.mint(alice(), Amount::new(100));
        let Ok(received) = token.transfer(alice(), bob(), Amount::new(40)) else {
            panic!("expected Ok");
        };
        assert_eq!(received, Amount::new(40));
        assert_eq!(token.balance_of(&alice()), Amount::new(60));
        assert_eq!(token.balance_of(&bob()), Amount::new(40));
    }

    #[test]
    fn taxed_transfer_reports_received_delta() {
        let mut token = InMemoryToken::with_tax_bps(200);
        token.mint(alice(), Amount::new(1_000));
        let Ok(received) = token.transfer(alice(), bob(), Amount::new(100)) else {
            panic!("expected Ok");
        };
        // 2% of 100 withheld
        assert_eq!(received, Amount::new(98));
        assert_eq!(token.balance_of(&alice()), Amount::new(900));
        assert_eq!(token.balance_of(&bob()), Amount::new(98));
    }

    #[test]
    fn tax_rounds_down() {
        let mut token = InMemoryToken::with_tax_bps(200);
        token.mint(alice(), Amount::new(100));
        // 2% of 49 = 0.98 -> 0 withheld
        let Ok(received) = token.transfer(alice(), bob(), Amount::new(49)) else {
            panic!("expected Ok");
        };
        assert_eq!(received, Amount::new(49));
    }

    #[test]
    fn transfer_exceeding_balance_rejected() {
        let mut token = InMemoryToken::new();
        token.mint(alice(), Amount::new(10));
        let result = token.transfer(alice(), bob(), Amount::new(11));
        assert!(matches!(result, Err(AmmError::InsufficientBalance)));
        assert_eq!(token.balance_of(&alice()), Amount::new(10));
        assert_eq!(token.balance_of(&bob()), Amount::ZERO);
    }

    #[test]
    fn zero_transfer_is_a_no_op() {
        let mut token = InMemoryToken::new();
        let Ok(received) = token.transfer(alice(), bob(), Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(received, Amount::ZERO);
    }

    #[test]
    fn full_tax_delivers_nothing() {
        let mut token = InMemoryToken::with_tax_bps(10_000);
        token.mint(alice(), Amount::new(100));
        let Ok(received) = token.transfer(alice(), bob(), Amount::new(100)) else {
            panic!("expected Ok");
        };
        assert_eq!(received, Amount::ZERO);
        assert_eq!(token.balance_of(&alice()), Amount::ZERO);
        assert_eq!(token.balance_of(&bob()), Amount::ZERO);
    }

    // -- ManualClock ---------------------------------------------------------------

    #[test]
    fn clock_starts_where_told_and_advances() {
        let mut clock = ManualClock::new(Timestamp::new(100));
        assert_eq!(clock.now(), Timestamp::new(100));
        clock.advance(50);
        assert_eq!(clock.now(), Timestamp::new(150));
    }
}
