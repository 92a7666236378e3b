//! Issued-token provenance.

use serde::{Deserialize, Serialize};

use super::{AccountId, Amount, Timestamp, TokenAddress, TokenId};
use crate::error::{LaunchpadError, Result};

/// Human-facing description of a token, fixed at issuance.
///
/// # Examples
///
/// ```
/// use launchpad_amm::domain::TokenMetadata;
///
/// let meta = TokenMetadata::new("Fan Token", "FAN", "ipfs://logo").expect("valid");
/// assert_eq!(meta.symbol(), "FAN");
/// assert!(TokenMetadata::new("", "FAN", "").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenMetadata {
    name: String,
    symbol: String,
    image_ref: String,
}

impl TokenMetadata {
    /// Creates validated metadata.  The image reference may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::InvalidParameter`] if `name` or `symbol`
    /// is empty or whitespace only.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Result<Self> {
        let meta = Self {
            name: name.into(),
            symbol: symbol.into(),
            image_ref: image_ref.into(),
        };
        meta.validate()?;
        Ok(meta)
    }

    /// Re-checks the invariants, e.g. after deserialization.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::InvalidParameter`] on an empty name or symbol.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(LaunchpadError::InvalidParameter("token name must not be empty"));
        }
        if self.symbol.trim().is_empty() {
            return Err(LaunchpadError::InvalidParameter(
                "token symbol must not be empty",
            ));
        }
        Ok(())
    }

    /// Token name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Reference to the token image (URL, content hash, or empty).
    #[must_use]
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }
}

/// Immutable record of one issued token.
///
/// Created exactly once by the registry; never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenRecord {
    pub(crate) id: TokenId,
    pub(crate) address: TokenAddress,
    pub(crate) owner: AccountId,
    pub(crate) metadata: TokenMetadata,
    pub(crate) total_supply: Amount,
    pub(crate) initial_liquidity: Amount,
    pub(crate) created_at: Timestamp,
}

impl TokenRecord {
    /// Registry id.
    #[must_use]
    pub const fn id(&self) -> TokenId {
        self.id
    }

    /// Address of the token instance.
    #[must_use]
    pub const fn address(&self) -> TokenAddress {
        self.address
    }

    /// Account that requested issuance.
    #[must_use]
    pub const fn owner(&self) -> AccountId {
        self.owner
    }

    /// Name, symbol and image.
    #[must_use]
    pub const fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    /// Fixed supply minted at issuance.
    pub const fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Reserve asset the owner contributed at issuance.
    pub const fn initial_liquidity(&self) -> Amount {
        self.initial_liquidity
    }

    /// Issuance time; non-decreasing in id order.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
