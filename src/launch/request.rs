//! Launch parameters and outcome.

use serde::Serialize;

use crate::domain::{AccountId, Amount, BasisPoints, PoolInfo, Rounding, TokenAddress, TokenId, TxRef};
use crate::error::{LaunchpadError, Result};
use crate::math::CheckedArithmetic;
use crate::registry::IssueRequest;

/// Everything needed to issue a token and seed its pool in one step.
///
/// `pool_share` is the part of the supply that goes into the pool, in basis
/// points; the owner receives the remainder.  There is no default split.
///
/// # Examples
///
/// ```
/// use launchpad_amm::domain::{AccountId, Amount, BasisPoints};
/// use launchpad_amm::launch::LaunchRequest;
/// use launchpad_amm::registry::IssueRequest;
///
/// let issue = IssueRequest::new("Fan Token", "FAN", "", Amount::new(1_000)).expect("valid");
/// let req = LaunchRequest::new(
///     issue,
///     AccountId::from_bytes([1u8; 32]),
///     Amount::new(50),
///     BasisPoints::new(8_000),
/// )
/// .expect("valid");
/// assert_eq!(req.split().ok(), Some((Amount::new(800), Amount::new(200))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    issue: IssueRequest,
    owner: AccountId,
    reserve_amount: Amount,
    pool_share: BasisPoints,
}

impl LaunchRequest {
    /// Creates a validated request.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::InvalidParameter`] if
    /// [`validate`](Self::validate) fails.
    pub fn new(
        issue: IssueRequest,
        owner: AccountId,
        reserve_amount: Amount,
        pool_share: BasisPoints,
    ) -> Result<Self> {
        let request = Self {
            issue,
            owner,
            reserve_amount,
            pool_share,
        };
        request.validate()?;
        Ok(request)
    }

    /// Checks the issuance rules plus:
    ///
    /// - `reserve_amount > 0`
    /// - `0 < pool_share <= 10 000` bp
    /// - the pool's share of the supply is at least one raw unit
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::InvalidParameter`] on the first violation.
    pub fn validate(&self) -> Result<()> {
        self.issue.validate()?;
        if self.reserve_amount.is_zero() {
            return Err(LaunchpadError::InvalidParameter(
                "reserve amount must be positive",
            ));
        }
        if self.pool_share.get() == 0 || !self.pool_share.is_valid_percent() {
            return Err(LaunchpadError::InvalidParameter(
                "pool share must be within (0, 10000] bp",
            ));
        }
        let (pool_tokens, _) = self.split()?;
        if pool_tokens.is_zero() {
            return Err(LaunchpadError::InvalidParameter(
                "pool share of supply rounds to zero",
            ));
        }
        Ok(())
    }

    /// Splits the supply into `(pool_tokens, owner_tokens)`; the pool's
    /// part is rounded down.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::Overflow`] if the share exceeds 100%.
    pub fn split(&self) -> Result<(Amount, Amount)> {
        let supply = self.issue.total_supply();
        let pool_tokens = self.pool_share.apply(supply, Rounding::Down)?;
        let owner_tokens = supply.safe_sub(&pool_tokens)?;
        Ok((pool_tokens, owner_tokens))
    }

    /// Token parameters.
    #[must_use]
    pub const fn issue(&self) -> &IssueRequest {
        &self.issue
    }

    /// Issuing account; pays the reserve and receives the remainder.
    #[must_use]
    pub const fn owner(&self) -> AccountId {
        self.owner
    }

    /// Reserve asset seeded into the pool.
    #[must_use]
    pub const fn reserve_amount(&self) -> Amount {
        self.reserve_amount
    }

    /// Share of the supply seeded into the pool.
    #[must_use]
    pub const fn pool_share(&self) -> BasisPoints {
        self.pool_share
    }
}

/// Outcome of a successful launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LaunchReceipt {
    pub(crate) token_id: TokenId,
    pub(crate) token_address: TokenAddress,
    pub(crate) pool_info: PoolInfo,
    pub(crate) owner_tokens: Amount,
    pub(crate) tx_ref: TxRef,
}

impl LaunchReceipt {
    /// Registry id of the new token.
    #[must_use]
    pub const fn token_id(&self) -> TokenId {
        self.token_id
    }

    /// Address of the new token.
    #[must_use]
    pub const fn token_address(&self) -> TokenAddress {
        self.token_address
    }

    /// Reserves the pool was seeded with.
    #[must_use]
    pub const fn pool_info(&self) -> PoolInfo {
        self.pool_info
    }

    /// Tokens paid to the owner.
    #[must_use]
    pub const fn owner_tokens(&self) -> Amount {
        self.owner_tokens
    }

    /// Reference of the launch.
    #[must_use]
    pub const fn tx_ref(&self) -> TxRef {
        self.tx_ref
    }
}
