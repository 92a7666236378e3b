//! Assets moved by the engine and the direction of a swap.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::TokenAddress;

/// Something the transfer capability can move: the shared reserve asset or
/// an issued token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Asset {
    /// The native reserve asset every pool is priced against.
    Reserve,
    /// A token issued through the registry.
    Token(TokenAddress),
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reserve => f.write_str("reserve"),
            Self::Token(address) => write!(f, "token {address}"),
        }
    }
}

/// Which side of a pool a swap pays into.
///
/// # Examples
///
/// ```
/// use launchpad_amm::domain::{Asset, SwapDirection, TokenAddress};
///
/// let token = TokenAddress::from_bytes([9u8; 32]);
/// let dir = SwapDirection::ReserveToToken;
/// assert_eq!(dir.input_asset(token), Asset::Reserve);
/// assert_eq!(dir.output_asset(token), Asset::Token(token));
/// assert_eq!(dir.reverse(), SwapDirection::TokenToReserve);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapDirection {
    /// Pay reserve asset, receive tokens (a buy).
    ReserveToToken,
    /// Pay tokens, receive reserve asset (a sell).
    TokenToReserve,
}

impl SwapDirection {
    /// Asset the caller pays in.
    #[must_use]
    pub const fn input_asset(&self, token: TokenAddress) -> Asset {
        match self {
            Self::ReserveToToken => Asset::Reserve,
            Self::TokenToReserve => Asset::Token(token),
        }
    }

    /// Asset the caller receives.
    #[must_use]
    pub const fn output_asset(&self, token: TokenAddress) -> Asset {
        self.reverse().input_asset(token)
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        match self {
            Self::ReserveToToken => Self::TokenToReserve,
            Self::TokenToReserve => Self::ReserveToToken,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReserveToToken => f.write_str("reserve->token"),
            Self::TokenToReserve => f.write_str("token->reserve"),
        }
    }
}
