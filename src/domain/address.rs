//! Account address identifying share holders and ledger accounts.

use core::fmt;

/// A 20-byte account address.
///
/// Addresses identify share holders in the pool's balance map and
/// accounts in a [`TokenLedger`](crate::ledger::TokenLedger). The core
/// never interprets address bytes; it only compares and orders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub struct Address([u8; 20]);

impl Address {
    /// Creates an address from raw bytes.
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Returns the raw address bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
