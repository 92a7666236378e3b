//! Registry: identity and provenance of issued tokens.
//!
//! Tokens live in an arena indexed by [`TokenId`]; ids are dense, start at
//! zero and are never reused, so callers enumerate `[0, get_total_tokens())`.
//! Two secondary indices map owners to their tokens (in issuance order) and
//! addresses back to ids.
//!
//! Addresses are derived deterministically from the id, the owner and the
//! symbol with SHA-256, which lets the issuance coordinator know a token's
//! address before anything is recorded.

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::domain::{AccountId, Amount, Timestamp, TokenAddress, TokenId, TokenMetadata, TokenRecord};
use crate::error::{LaunchpadError, Result};

/// Domain separator mixed into every address derivation.
const ADDRESS_DOMAIN: &[u8] = b"launchpad-amm/token";

/// Parameters of a token issuance.
///
/// # Examples
///
/// ```
/// use launchpad_amm::domain::Amount;
/// use launchpad_amm::registry::IssueRequest;
///
/// let req = IssueRequest::new("Fan Token", "FAN", "", Amount::units(1_000_000));
/// assert!(req.is_ok());
/// assert!(IssueRequest::new("Fan Token", "FAN", "", Amount::ZERO).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRequest {
    metadata: TokenMetadata,
    total_supply: Amount,
}

impl IssueRequest {
    /// Creates a validated request.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::InvalidParameter`] on empty name or symbol
    /// or a zero supply.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        image_ref: impl Into<String>,
        total_supply: Amount,
    ) -> Result<Self> {
        Self::from_metadata(TokenMetadata::new(name, symbol, image_ref)?, total_supply)
    }

    /// Creates a request from already validated metadata.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::InvalidParameter`] on a zero supply.
    pub fn from_metadata(metadata: TokenMetadata, total_supply: Amount) -> Result<Self> {
        let request = Self {
            metadata,
            total_supply,
        };
        request.validate()?;
        Ok(request)
    }

    /// Re-checks every issuance precondition.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::InvalidParameter`] on the first violation.
    pub fn validate(&self) -> Result<()> {
        self.metadata.validate()?;
        if self.total_supply.is_zero() {
            return Err(LaunchpadError::InvalidParameter(
                "total supply must be positive",
            ));
        }
        Ok(())
    }

    /// Name, symbol and image.
    #[must_use]
    pub const fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    /// Supply to mint.
    #[must_use]
    pub const fn total_supply(&self) -> Amount {
        self.total_supply
    }
}

/// Arena of [`TokenRecord`]s plus owner and address indices.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tokens: Vec<TokenRecord>,
    by_owner: BTreeMap<AccountId, Vec<TokenId>>,
    by_address: BTreeMap<TokenAddress, TokenId>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the address a token with these parameters receives.
    #[must_use]
    pub fn derive_address(id: TokenId, owner: AccountId, symbol: &str) -> TokenAddress {
        let mut hasher = Sha256::new();
        hasher.update(ADDRESS_DOMAIN);
        hasher.update(id.get().to_be_bytes());
        hasher.update(owner.as_bytes());
        hasher.update(symbol.as_bytes());
        TokenAddress::from_bytes(hasher.finalize().into())
    }

    /// Id the next issuance will receive.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::Overflow`] if the id space is exhausted.
    pub fn next_token_id(&self) -> Result<TokenId> {
        u64::try_from(self.tokens.len())
            .map(TokenId::new)
            .map_err(|_| LaunchpadError::Overflow("token id space exhausted"))
    }

    /// Id and address the next issuance of `request` by `owner` receives.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::Overflow`] if the id space is exhausted.
    pub fn preview(&self, owner: AccountId, request: &IssueRequest) -> Result<(TokenId, TokenAddress)> {
        let id = self.next_token_id()?;
        Ok((
            id,
            Self::derive_address(id, owner, request.metadata.symbol()),
        ))
    }

    /// Records a new token and returns its record.
    ///
    /// `created_at` is `now`, clamped so it never precedes the previous
    /// record's timestamp.  Asset creation and event publication belong to
    /// the caller.
    ///
    /// # Errors
    ///
    /// - [`LaunchpadError::InvalidParameter`] if the request is invalid or
    ///   the derived address is already taken.
    /// - [`LaunchpadError::Overflow`] if the id space is exhausted.
    pub fn issue(
        &mut self,
        request: IssueRequest,
        owner: AccountId,
        initial_liquidity: Amount,
        now: Timestamp,
    ) -> Result<TokenRecord> {
        request.validate()?;
        let (id, address) = self.preview(owner, &request)?;
        if self.by_address.contains_key(&address) {
            return Err(LaunchpadError::InvalidParameter("token address already taken"));
        }
        let created_at = self
            .tokens
            .last()
            .map_or(now, |last| now.max(last.created_at));

        let record = TokenRecord {
            id,
            address,
            owner,
            metadata: request.metadata,
            total_supply: request.total_supply,
            initial_liquidity,
            created_at,
        };
        self.tokens.push(record.clone());
        self.by_owner.entry(owner).or_default().push(id);
        self.by_address.insert(address, id);
        debug!(token_id = %id, token = %address, owner = %owner, "token recorded");
        Ok(record)
    }

    /// Returns the record for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::TokenNotFound`] if `id` was never issued.
    pub fn get_token_info(&self, id: TokenId) -> Result<&TokenRecord> {
        usize::try_from(id.get())
            .ok()
            .and_then(|idx| self.tokens.get(idx))
            .ok_or(LaunchpadError::TokenNotFound(id))
    }

    /// Returns the address of token `id`.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::TokenNotFound`] if `id` was never issued.
    pub fn get_token_address(&self, id: TokenId) -> Result<TokenAddress> {
        self.get_token_info(id).map(TokenRecord::address)
    }

    /// Tokens issued by `owner`, in issuance order.
    #[must_use]
    pub fn get_user_tokens(&self, owner: &AccountId) -> &[TokenId] {
        self.by_owner.get(owner).map_or(&[][..], Vec::as_slice)
    }

    /// Number of issued tokens.
    #[must_use]
    pub fn get_total_tokens(&self) -> u64 {
        // a Vec never holds more than u64::MAX elements on supported targets
        self.tokens.len() as u64
    }

    /// Looks a token up by address.
    #[must_use]
    pub fn token_by_address(&self, address: &TokenAddress) -> Option<&TokenRecord> {
        self.by_address
            .get(address)
            .and_then(|id| self.get_token_info(*id).ok())
    }

    /// All records in id order.
    pub fn iter(&self) -> impl Iterator<Item = &TokenRecord> {
        self.tokens.iter()
    }

    /// Removes the most recent record if it is `id`.
    pub(crate) fn rollback_last(&mut self, id: TokenId) -> Option<TokenRecord> {
        if self.tokens.last().map(TokenRecord::id) != Some(id) {
            return None;
        }
        let record = self.tokens.pop()?;
        self.by_address.remove(&record.address);
        if let Some(ids) = self.by_owner.get_mut(&record.owner) {
            ids.retain(|t| *t != id);
            if ids.is_empty() {
                self.by_owner.remove(&record.owner);
            }
        }
        debug!(token_id = %id, "token record rolled back");
        Some(record)
    }
}
