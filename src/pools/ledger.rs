//! Per-token pool storage.

use std::collections::BTreeMap;

use super::Pool;
use crate::domain::{Amount, PoolInfo, TokenAddress};
use crate::error::{LaunchpadError, Result};

/// Owns every [`Pool`], keyed by token address.
///
/// Absent tokens read as an all-zero [`PoolInfo`]; callers treat
/// `token_reserves > 0` as the existence check.
#[derive(Debug, Clone, Default)]
pub struct PoolLedger {
    pools: BTreeMap<TokenAddress, Pool>,
}

impl PoolLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the reserves for `token`, or zeros if it has no pool.
    #[must_use]
    pub fn get_pool_info(&self, token: &TokenAddress) -> PoolInfo {
        self.pools
            .get(token)
            .map_or_else(PoolInfo::default, Pool::info)
    }

    /// Returns the pool for `token`, if any.
    #[must_use]
    pub fn pool(&self, token: &TokenAddress) -> Option<&Pool> {
        self.pools.get(token)
    }

    /// Returns `true` if `token` has a seeded pool.
    #[must_use]
    pub fn contains(&self, token: &TokenAddress) -> bool {
        self.get_pool_info(token).exists()
    }

    /// Number of pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns `true` if no pool was created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Tokens with a pool, in address order.
    pub fn tokens(&self) -> impl Iterator<Item = &TokenAddress> {
        self.pools.keys()
    }

    /// Inserts a freshly seeded pool.
    pub(crate) fn create(
        &mut self,
        token: TokenAddress,
        token_amount: Amount,
        reserve_amount: Amount,
    ) -> Result<PoolInfo> {
        self.ensure_vacant(&token)?;
        let pool = Pool::seed(token_amount, reserve_amount)?;
        self.pools.insert(token, pool);
        Ok(pool.info())
    }

    /// Fails with [`LaunchpadError::PoolAlreadyExists`] if `token` has a
    /// non-empty pool.
    pub(crate) fn ensure_vacant(&self, token: &TokenAddress) -> Result<()> {
        if self.contains(token) {
            return Err(LaunchpadError::PoolAlreadyExists(*token));
        }
        Ok(())
    }

    pub(crate) fn pool_mut(&mut self, token: &TokenAddress) -> Result<&mut Pool> {
        self.pools
            .get_mut(token)
            .ok_or(LaunchpadError::PoolNotFound(*token))
    }

    /// Writes `pool` for `token`, replacing any previous state.
    pub(crate) fn store(&mut self, token: TokenAddress, pool: Pool) {
        self.pools.insert(token, pool);
    }

    pub(crate) fn remove(&mut self, token: &TokenAddress) -> Option<Pool> {
        self.pools.remove(token)
    }
}
