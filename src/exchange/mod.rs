//! Exchange Engine: pool creation, liquidity and swaps.
//!
//! These operations live on [`Launchpad`] so that pool state and the
//! matching asset transfers change together.  Pricing itself is the pure
//! [`quote_exact_in`] function; this module adds the pool lookup, the
//! trading switch, the transfers and the rollback.
//!
//! # Swap (reserve asset → token)
//!
//! 1. price the swap against the current reserves
//! 2. pull `amount_in` of the reserve asset from the trader
//! 3. `reserve_reserves += amount_in`, `token_reserves -= amount_out`
//! 4. pay `amount_out` tokens to the trader
//! 5. publish [`Event::SwapExecuted`]
//!
//! The token → reserve direction mirrors it.  Reserves are committed
//! before the payout, and restored if the payout is refused.

mod journal;
#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub(crate) use journal::Journal;

use tracing::{debug, info};

use crate::domain::{
    AccountId, Amount, Asset, Event, FeeRate, PoolInfo, Price, Quote, SwapDirection,
    SwapReceipt, TokenAddress,
};
use crate::error::{LaunchpadError, Result};
use crate::launch::Launchpad;
use crate::math::{check_deposit_ratio, quote_exact_in};
use crate::pools::Pool;
use crate::traits::{AssetTransfer, Clock, EventSink};

impl<B, S, C> Launchpad<B, S, C>
where
    B: AssetTransfer,
    S: EventSink,
    C: Clock,
{
    // -- pools ------------------------------------------------------------------

    /// Creates the pool for `token`, funded by `caller`, and enables trading.
    ///
    /// # Errors
    ///
    /// - [`LaunchpadError::Unauthorized`] if `caller` is the custody account.
    /// - [`LaunchpadError::InvalidParameter`] if either amount is zero.
    /// - [`LaunchpadError::PoolAlreadyExists`] if `token` already has a pool.
    /// - [`LaunchpadError::InsufficientFunds`] /
    ///   [`LaunchpadError::TransferFailed`] if `caller` cannot supply both
    ///   amounts; nothing is kept in that case.
    pub fn create_pool(
        &mut self,
        caller: AccountId,
        token: TokenAddress,
        token_amount: Amount,
        reserve_amount: Amount,
    ) -> Result<PoolInfo> {
        self.ensure_participant(caller)?;
        let pool = Pool::seed(token_amount, reserve_amount)?;
        self.pools.ensure_vacant(&token)?;
        let tx_ref = self.peek_tx_ref()?;

        let mut journal = Journal::new("create_pool");
        if let Err(err) = journal.pull(&mut self.bank, Asset::Token(token), caller, token_amount) {
            return Err(journal.unwind(&mut self.bank, err));
        }
        if let Err(err) = journal.pull(&mut self.bank, Asset::Reserve, caller, reserve_amount) {
            return Err(journal.unwind(&mut self.bank, err));
        }
        self.pools.store(token, pool);

        self.commit_tx_ref(tx_ref);
        info!(%tx_ref, %token, %caller, %token_amount, %reserve_amount, "pool created");
        self.sink.emit(Event::PoolCreated {
            token,
            token_amount,
            reserve_amount,
        });
        Ok(pool.info())
    }

    /// Deposits both assets into an existing pool without minting shares.
    ///
    /// The pair must match the pool's token/reserve ratio within the
    /// configured tolerance.
    ///
    /// # Errors
    ///
    /// - [`LaunchpadError::Unauthorized`] if `caller` is the custody account.
    /// - [`LaunchpadError::InvalidParameter`] if either amount is zero.
    /// - [`LaunchpadError::PoolNotFound`] if `token` has no pool.
    /// - [`LaunchpadError::Unsupported`] if trading is disabled.
    /// - [`LaunchpadError::InsufficientAmount`] if the pair is lopsided.
    /// - [`LaunchpadError::InsufficientFunds`] /
    ///   [`LaunchpadError::TransferFailed`] if `caller` cannot pay.
    pub fn add_liquidity(
        &mut self,
        caller: AccountId,
        token: TokenAddress,
        token_amount: Amount,
        reserve_amount: Amount,
    ) -> Result<PoolInfo> {
        self.ensure_participant(caller)?;
        let snapshot = self.trading_pool(&token)?;
        check_deposit_ratio(
            token,
            snapshot.info(),
            token_amount,
            reserve_amount,
            self.config.liquidity_tolerance(),
        )?;
        let mut updated = snapshot;
        updated.deposit(token_amount, reserve_amount)?;
        let tx_ref = self.peek_tx_ref()?;

        let mut journal = Journal::new("add_liquidity");
        if let Err(err) = journal.pull(&mut self.bank, Asset::Token(token), caller, token_amount) {
            return Err(journal.unwind(&mut self.bank, err));
        }
        if let Err(err) = journal.pull(&mut self.bank, Asset::Reserve, caller, reserve_amount) {
            return Err(journal.unwind(&mut self.bank, err));
        }
        self.pools.store(token, updated);

        self.commit_tx_ref(tx_ref);
        info!(
            %tx_ref,
            %token,
            %caller,
            %token_amount,
            %reserve_amount,
            token_reserves = %updated.token_reserves(),
            reserve_reserves = %updated.reserve_reserves(),
            "liquidity added"
        );
        self.sink.emit(Event::LiquidityAdded {
            token,
            token_amount,
            reserve_amount,
        });
        Ok(updated.info())
    }

    /// Enables or disables trading and deposits for `token`.
    ///
    /// # Errors
    ///
    /// - [`LaunchpadError::Unauthorized`] unless `caller` is the operator.
    /// - [`LaunchpadError::PoolNotFound`] if `token` has no pool.
    pub fn set_supported(
        &mut self,
        caller: AccountId,
        token: TokenAddress,
        supported: bool,
    ) -> Result<()> {
        if caller != self.config.operator() {
            return Err(LaunchpadError::Unauthorized(caller));
        }
        let pool = self.pools.pool_mut(&token)?;
        if pool.is_supported() == supported {
            return Ok(());
        }
        pool.set_supported(supported);
        info!(%token, supported, "trading switch changed");
        self.sink.emit(Event::SupportChanged { token, supported });
        Ok(())
    }

    // -- quotes -------------------------------------------------------------------

    /// Prices a swap without changing anything.
    ///
    /// # Errors
    ///
    /// - [`LaunchpadError::PoolNotFound`] if `token` has no pool or trading
    ///   is disabled.
    /// - Any pricing error from [`quote_exact_in`].
    pub fn quote(
        &self,
        token: TokenAddress,
        amount_in: Amount,
        direction: SwapDirection,
    ) -> Result<Quote> {
        let pool = self
            .pools
            .pool(&token)
            .filter(|p| p.is_supported())
            .ok_or(LaunchpadError::PoolNotFound(token))?;
        let quote = quote_exact_in(token, pool.info(), direction, amount_in, self.fee_rate())?;
        debug!(%token, %quote, "quoted");
        Ok(quote)
    }

    /// Output amount of a swap, see [`quote`](Self::quote).
    ///
    /// # Errors
    ///
    /// Same as [`quote`](Self::quote).
    pub fn quote_output(
        &self,
        token: TokenAddress,
        amount_in: Amount,
        direction: SwapDirection,
    ) -> Result<Amount> {
        self.quote(token, amount_in, direction).map(|q| q.amount_out())
    }

    /// Tokens received for `reserve_in` of the reserve asset.
    ///
    /// # Errors
    ///
    /// Same as [`quote`](Self::quote).
    pub fn token_amount_for_reserve(&self, token: TokenAddress, reserve_in: Amount) -> Result<Amount> {
        self.quote_output(token, reserve_in, SwapDirection::ReserveToToken)
    }

    /// Reserve asset received for `token_in` tokens.
    ///
    /// # Errors
    ///
    /// Same as [`quote`](Self::quote).
    pub fn reserve_amount_for_token(&self, token: TokenAddress, token_in: Amount) -> Result<Amount> {
        self.quote_output(token, token_in, SwapDirection::TokenToReserve)
    }

    // -- swaps --------------------------------------------------------------------

    /// Swaps exactly `amount_in` of the input side of `direction`.
    ///
    /// # Errors
    ///
    /// - [`LaunchpadError::Unauthorized`] if `caller` is the custody account.
    /// - [`LaunchpadError::PoolNotFound`] if `token` has no pool.
    /// - [`LaunchpadError::Unsupported`] if trading is disabled.
    /// - [`LaunchpadError::InvalidParameter`] /
    ///   [`LaunchpadError::InsufficientLiquidity`] from pricing.
    /// - [`LaunchpadError::InsufficientFunds`] /
    ///   [`LaunchpadError::TransferFailed`] from either transfer; the pool
    ///   and balances are left as they were.
    pub fn swap(
        &mut self,
        caller: AccountId,
        token: TokenAddress,
        amount_in: Amount,
        direction: SwapDirection,
    ) -> Result<SwapReceipt> {
        self.execute_swap(caller, token, amount_in, direction, None)
    }

    /// Like [`swap`](Self::swap), but rejects the trade if it would pay out
    /// less than `min_output`.
    ///
    /// # Errors
    ///
    /// [`LaunchpadError::SlippageExceeded`] below the floor, otherwise the
    /// same as [`swap`](Self::swap).
    pub fn swap_with_min_output(
        &mut self,
        caller: AccountId,
        token: TokenAddress,
        amount_in: Amount,
        direction: SwapDirection,
        min_output: Amount,
    ) -> Result<SwapReceipt> {
        self.execute_swap(caller, token, amount_in, direction, Some(min_output))
    }

    /// Buys tokens with `reserve_in` of the reserve asset.
    ///
    /// # Errors
    ///
    /// Same as [`swap`](Self::swap).
    pub fn swap_reserve_for_token(
        &mut self,
        caller: AccountId,
        token: TokenAddress,
        reserve_in: Amount,
    ) -> Result<SwapReceipt> {
        self.swap(caller, token, reserve_in, SwapDirection::ReserveToToken)
    }

    /// Sells `token_in` tokens for the reserve asset.
    ///
    /// # Errors
    ///
    /// Same as [`swap`](Self::swap).
    pub fn swap_token_for_reserve(
        &mut self,
        caller: AccountId,
        token: TokenAddress,
        token_in: Amount,
    ) -> Result<SwapReceipt> {
        self.swap(caller, token, token_in, SwapDirection::TokenToReserve)
    }

    fn execute_swap(
        &mut self,
        caller: AccountId,
        token: TokenAddress,
        amount_in: Amount,
        direction: SwapDirection,
        min_output: Option<Amount>,
    ) -> Result<SwapReceipt> {
        self.ensure_participant(caller)?;
        let snapshot = self.trading_pool(&token)?;
        let quote = quote_exact_in(token, snapshot.info(), direction, amount_in, self.fee_rate())?;
        if let Some(minimum) = min_output {
            if quote.amount_out() < minimum {
                return Err(LaunchpadError::SlippageExceeded {
                    minimum,
                    actual: quote.amount_out(),
                });
            }
        }
        let mut updated = snapshot;
        updated.apply_swap(&quote)?;
        let tx_ref = self.peek_tx_ref()?;

        let mut journal = Journal::new("swap");
        if let Err(err) = journal.pull(
            &mut self.bank,
            direction.input_asset(token),
            caller,
            amount_in,
        ) {
            return Err(journal.unwind(&mut self.bank, err));
        }
        self.pools.store(token, updated);
        if let Err(err) = self.bank.transfer_out(
            direction.output_asset(token),
            caller,
            quote.amount_out(),
        ) {
            self.pools.store(token, snapshot);
            return Err(journal.unwind(&mut self.bank, err.into()));
        }

        self.commit_tx_ref(tx_ref);
        info!(
            %tx_ref,
            %token,
            %caller,
            %direction,
            amount_in = %quote.amount_in(),
            amount_out = %quote.amount_out(),
            fee = %quote.fee(),
            "swap executed"
        );
        self.sink.emit(Event::SwapExecuted {
            user: caller,
            token,
            input_amount: quote.amount_in(),
            output_amount: quote.amount_out(),
            direction,
            tx_ref,
        });
        Ok(SwapReceipt { tx_ref, quote })
    }

    // -- reads --------------------------------------------------------------------

    /// Global swap fee.
    #[must_use]
    pub const fn fee_rate(&self) -> FeeRate {
        self.config.fee_rate()
    }

    /// Returns `true` if `token` has a pool with trading enabled.
    #[must_use]
    pub fn is_supported(&self, token: &TokenAddress) -> bool {
        self.pools.pool(token).is_some_and(Pool::is_supported)
    }

    /// Reserve units per token at current reserves.  Display only.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::PoolNotFound`] if `token` has no pool.
    pub fn spot_price(&self, token: &TokenAddress) -> Result<Price> {
        self.pools
            .pool(token)
            .ok_or(LaunchpadError::PoolNotFound(*token))?
            .spot_price()
    }

    /// Copy of the pool for `token` if trading is enabled on it.
    fn trading_pool(&self, token: &TokenAddress) -> Result<Pool> {
        let pool = self
            .pools
            .pool(token)
            .copied()
            .ok_or(LaunchpadError::PoolNotFound(*token))?;
        if !pool.is_supported() {
            return Err(LaunchpadError::Unsupported(*token));
        }
        Ok(pool)
    }
}
