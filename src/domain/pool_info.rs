//! Reserve snapshot of a pool.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, SwapDirection};

/// The two reserves of a pool at one point in the ledger order.
///
/// A zeroed `PoolInfo` is what the ledger reports for a token without a
/// pool; [`exists`](Self::exists) is the canonical "pool created" check.
///
/// # Examples
///
/// ```
/// use launchpad_amm::domain::{Amount, PoolInfo};
///
/// assert!(!PoolInfo::default().exists());
/// let info = PoolInfo::new(Amount::new(100_000), Amount::new(10_000));
/// assert!(info.exists());
/// assert_eq!(info.product(), Some(1_000_000_000));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct PoolInfo {
    token_reserves: Amount,
    reserve_reserves: Amount,
}

impl PoolInfo {
    /// Creates a snapshot from the two reserves.
    #[must_use]
    pub const fn new(token_reserves: Amount, reserve_reserves: Amount) -> Self {
        Self {
            token_reserves,
            reserve_reserves,
        }
    }

    /// Tokens held by the pool.
    pub const fn token_reserves(&self) -> Amount {
        self.token_reserves
    }

    /// Reserve asset held by the pool.
    pub const fn reserve_reserves(&self) -> Amount {
        self.reserve_reserves
    }

    /// `true` once the pool was created (token reserves are non-zero).
    #[must_use]
    pub const fn exists(&self) -> bool {
        !self.token_reserves.is_zero()
    }

    /// Returns `(reserve_in, reserve_out)` for a swap in `direction`.
    pub const fn sides(&self, direction: SwapDirection) -> (Amount, Amount) {
        match direction {
            SwapDirection::ReserveToToken => (self.reserve_reserves, self.token_reserves),
            SwapDirection::TokenToReserve => (self.token_reserves, self.reserve_reserves),
        }
    }

    /// The invariant product `token_reserves * reserve_reserves`, or `None`
    /// if it does not fit in `u128`.
    #[must_use]
    pub const fn product(&self) -> Option<u128> {
        self.token_reserves.get().checked_mul(self.reserve_reserves.get())
    }
}

impl fmt::Display for PoolInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PoolInfo(tokens={}, reserve={})",
            self.token_reserves, self.reserve_reserves
        )
    }
}
