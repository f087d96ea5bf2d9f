//! Swap direction tag.

use core::fmt;

/// The direction of a swap, naming the input asset.
///
/// A single swap routine consumes this tag and selects the reserve-pair
/// ordering from it, instead of dispatching to per-direction functions.
///
/// # Examples
///
/// ```
/// use nova_amm::domain::SwapDirection;
///
/// let d = SwapDirection::NativeForToken;
/// assert_eq!(d.reversed(), SwapDirection::TokenForNative);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Sell the native asset, receive the token.
    NativeForToken,
    /// Sell the token, receive the native asset.
    TokenForNative,
}

impl SwapDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        match self {
            Self::NativeForToken => Self::TokenForNative,
            Self::TokenForNative => Self::NativeForToken,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NativeForToken => "native-for-token",
            Self::TokenForNative => "token-for-native",
        };
        write!(f, "{label}")
    }
}
