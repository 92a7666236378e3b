//! Global swap fee rate built on [`BasisPoints`].

use core::fmt;

use serde::{Deserialize, Serialize};

use super::BasisPoints;

/// The fee retained by a pool on every swap, in basis points of the
/// pre-fee output.
///
/// One rate applies to every pool.  It is fixed when the engine is
/// configured; callers can read it but not change it.
///
/// # Examples
///
/// ```
/// use launchpad_amm::domain::FeeRate;
///
/// let fee = FeeRate::HALF_PERCENT;
/// assert_eq!(fee.basis_points().get(), 50);
/// assert!(fee.is_chargeable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeRate(BasisPoints);

impl FeeRate {
    /// No fee.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// 0.30% fee (30 bp).
    pub const POINT_THREE_PERCENT: Self = Self(BasisPoints::new(30));

    /// 0.50% fee (50 bp), the launchpad default.
    pub const HALF_PERCENT: Self = Self(BasisPoints::new(50));

    /// Creates a fee rate from arbitrary [`BasisPoints`].
    ///
    /// Range checks happen in [`EngineConfig`](crate::config::EngineConfig).
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns `true` if a swap can still produce output: `0 <= fee < 100%`.
    #[must_use]
    pub const fn is_chargeable(&self) -> bool {
        self.0.get() < BasisPoints::MAX_PERCENT.get()
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        Self::HALF_PERCENT
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeRate({})", self.0)
    }
}
