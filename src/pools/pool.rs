//! A single constant-product reserve pair.

use serde::Serialize;

use crate::domain::{Amount, PoolInfo, Price, Quote, SwapDirection};
use crate::error::{LaunchpadError, Result};
use crate::math::CheckedArithmetic;

/// Reserves of one token against the reserve asset.
///
/// # State
///
/// - `token_reserves` / `reserve_reserves`: balances held for the pool in
///   raw units, fees included.
/// - `supported`: whether swaps and deposits are accepted.
///
/// A live pool always has both reserves non-zero; every mutation computes
/// the new reserves first and assigns them together, so a failed update
/// leaves the pool untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pool {
    token_reserves: Amount,
    reserve_reserves: Amount,
    supported: bool,
}

impl Pool {
    /// Seeds a pool and enables trading on it.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::InvalidParameter`] if either amount is zero.
    pub(crate) fn seed(token_amount: Amount, reserve_amount: Amount) -> Result<Self> {
        if token_amount.is_zero() || reserve_amount.is_zero() {
            return Err(LaunchpadError::InvalidParameter(
                "pool amounts must be positive",
            ));
        }
        Ok(Self {
            token_reserves: token_amount,
            reserve_reserves: reserve_amount,
            supported: true,
        })
    }

    /// Returns the token-side reserve.
    #[must_use]
    pub const fn token_reserves(&self) -> Amount {
        self.token_reserves
    }

    /// Returns the reserve-asset-side reserve.
    #[must_use]
    pub const fn reserve_reserves(&self) -> Amount {
        self.reserve_reserves
    }

    /// Returns `true` if trading is enabled.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        self.supported
    }

    /// Snapshot of the reserves.
    #[must_use]
    pub const fn info(&self) -> PoolInfo {
        PoolInfo::new(self.token_reserves, self.reserve_reserves)
    }

    /// Reserve units per token at the current reserves.  Display only.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::DivisionByZero`] for an empty pool.
    pub fn spot_price(&self) -> Result<Price> {
        Price::from_amounts(self.reserve_reserves, self.token_reserves)
    }

    pub(crate) fn set_supported(&mut self, supported: bool) {
        self.supported = supported;
    }

    /// Adds both amounts to the reserves.
    pub(crate) fn deposit(&mut self, token_amount: Amount, reserve_amount: Amount) -> Result<()> {
        let token_reserves = self.token_reserves.safe_add(&token_amount)?;
        let reserve_reserves = self.reserve_reserves.safe_add(&reserve_amount)?;
        self.token_reserves = token_reserves;
        self.reserve_reserves = reserve_reserves;
        Ok(())
    }

    /// Books a priced swap: the input side grows by the full input and the
    /// output side shrinks by the paid-out amount, so the fee stays inside.
    pub(crate) fn apply_swap(&mut self, quote: &Quote) -> Result<()> {
        let (token_reserves, reserve_reserves) = match quote.direction() {
            SwapDirection::ReserveToToken => (
                self.token_reserves.safe_sub(&quote.amount_out())?,
                self.reserve_reserves.safe_add(&quote.amount_in())?,
            ),
            SwapDirection::TokenToReserve => (
                self.token_reserves.safe_add(&quote.amount_in())?,
                self.reserve_reserves.safe_sub(&quote.amount_out())?,
            ),
        };
        self.token_reserves = token_reserves;
        self.reserve_reserves = reserve_reserves;
        Ok(())
    }
}
