//! 32-byte identities for tokens and accounts.
//!
//! [`TokenAddress`] names a deployed token instance; [`AccountId`] names a
//! participant (token owner, trader, operator, the engine's custody
//! account).  Both are opaque byte strings rendered as `0x`-prefixed hex.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing a hex identity fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected 0x-prefixed 32-byte hex string")]
pub struct ParseAddressError;

fn parse_hex32(s: &str) -> Result<[u8; 32], ParseAddressError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(digits, &mut bytes).map_err(|_| ParseAddressError)?;
    Ok(bytes)
}

macro_rules! hex_identity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name([u8; 32]);

        impl $name {
            /// Creates the identity from raw bytes.
            #[must_use]
            pub const fn from_bytes(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }

            /// Returns the underlying 32-byte representation.
            #[must_use]
            pub const fn as_bytes(&self) -> [u8; 32] {
                self.0
            }

            /// Returns the all-zero identity.
            #[must_use]
            pub const fn zero() -> Self {
                Self([0u8; 32])
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl FromStr for $name {
            type Err = ParseAddressError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_hex32(s).map(Self)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

hex_identity! {
    /// Address of a token issued through the registry.
    ///
    /// # Examples
    ///
    /// ```
    /// use launchpad_amm::domain::TokenAddress;
    ///
    /// let addr = TokenAddress::from_bytes([1u8; 32]);
    /// assert_eq!(addr.as_bytes(), [1u8; 32]);
    /// assert!(addr.to_string().starts_with("0x0101"));
    /// ```
    TokenAddress
}

hex_identity! {
    /// Identity of an account holding or moving assets.
    AccountId
}
