//! Engine-wide configuration.

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, BasisPoints, FeeRate};
use crate::error::{LaunchpadError, Result};

/// Default tolerance of the add-liquidity ratio check (1%).
pub const DEFAULT_LIQUIDITY_TOLERANCE: BasisPoints = BasisPoints::new(100);

/// Immutable parameters of a [`Launchpad`](crate::launch::Launchpad).
///
/// # Fields
///
/// - `fee_rate`: global swap fee retained by every pool.
/// - `liquidity_tolerance`: how far an `add_liquidity` deposit may
///   deviate from the pool's current token/reserve ratio.
/// - `operator`: the only account allowed to toggle trading.
/// - `custody`: account the transfer capability credits when the engine
///   pulls funds and debits when it pays out.
///
/// # Validation
///
/// - `fee_rate < 10 000` bp.
/// - `liquidity_tolerance <= 10 000` bp.
/// - `operator != custody`.
///
/// # Examples
///
/// ```
/// use launchpad_amm::config::EngineConfig;
/// use launchpad_amm::domain::{AccountId, FeeRate};
///
/// let cfg = EngineConfig::with_accounts(
///     AccountId::from_bytes([1u8; 32]),
///     AccountId::from_bytes([2u8; 32]),
/// )
/// .expect("distinct accounts");
/// assert_eq!(cfg.fee_rate(), FeeRate::HALF_PERCENT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    fee_rate: FeeRate,
    liquidity_tolerance: BasisPoints,
    operator: AccountId,
    custody: AccountId,
}

impl EngineConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::InvalidParameter`] if any rule in the type
    /// documentation is violated.
    pub fn new(
        fee_rate: FeeRate,
        liquidity_tolerance: BasisPoints,
        operator: AccountId,
        custody: AccountId,
    ) -> Result<Self> {
        let config = Self {
            fee_rate,
            liquidity_tolerance,
            operator,
            custody,
        };
        config.validate()?;
        Ok(config)
    }

    /// Default fee (0.5%) and tolerance (1%) for the given accounts.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::InvalidParameter`] if the accounts coincide.
    pub fn with_accounts(operator: AccountId, custody: AccountId) -> Result<Self> {
        Self::new(
            FeeRate::default(),
            DEFAULT_LIQUIDITY_TOLERANCE,
            operator,
            custody,
        )
    }

    /// Validates all configuration invariants.
    ///
    /// Call after deserializing a configuration from an external source.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::InvalidParameter`] on the first violated rule.
    pub fn validate(&self) -> Result<()> {
        if !self.fee_rate.is_chargeable() {
            return Err(LaunchpadError::InvalidParameter(
                "fee rate must be below 10000 bp",
            ));
        }
        if !self.liquidity_tolerance.is_valid_percent() {
            return Err(LaunchpadError::InvalidParameter(
                "liquidity tolerance must not exceed 10000 bp",
            ));
        }
        if self.operator == self.custody {
            return Err(LaunchpadError::InvalidParameter(
                "operator and custody accounts must differ",
            ));
        }
        Ok(())
    }

    /// Returns the global swap fee rate.
    #[must_use]
    pub const fn fee_rate(&self) -> FeeRate {
        self.fee_rate
    }

    /// Returns the add-liquidity ratio tolerance.
    #[must_use]
    pub const fn liquidity_tolerance(&self) -> BasisPoints {
        self.liquidity_tolerance
    }

    /// Returns the operator account.
    #[must_use]
    pub const fn operator(&self) -> AccountId {
        self.operator
    }

    /// Returns the custody account.
    #[must_use]
    pub const fn custody(&self) -> AccountId {
        self.custody
    }
}
