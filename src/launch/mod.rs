//! Issuance Coordinator and the engine's single point of mutation.
//!
//! [`Launchpad`] owns the [`Registry`], the [`PoolLedger`], the asset
//! transfer capability, the event sink and the clock.  Every state change
//! goes through a `&mut Launchpad` method, which is also what keeps a
//! transfer callback from re-entering the engine mid-operation.
//!
//! # Effects ordering
//!
//! Each mutating operation runs the same phases:
//!
//! 1. validate against current state, without side effects;
//! 2. pull inputs from the caller and mint new supply, journaled;
//! 3. commit registry and pool state;
//! 4. pay out to the caller;
//! 5. publish events.
//!
//! A failure in phases 2 to 4 restores the pre-call state and reverses the
//! journaled effects, so callers never observe a partial operation.
//!
//! The exchange operations (`create_pool`, `swap`, ...) are implemented on
//! the same type in [`crate::exchange`].

mod request;

pub use request::{LaunchReceipt, LaunchRequest};

use tracing::info;

use crate::config::EngineConfig;
use crate::domain::{
    AccountId, Amount, Asset, BasisPoints, Event, PoolInfo, TokenAddress, TokenId, TokenMetadata,
    TokenRecord, TxRef,
};
use crate::error::{LaunchpadError, Result};
use crate::exchange::Journal;
use crate::pools::PoolLedger;
use crate::registry::{IssueRequest, Registry};
use crate::traits::{AssetTransfer, Clock, EventSink, SystemClock};

/// The coordinating object holding all engine state.
///
/// # Type parameters
///
/// - `B`: the [`AssetTransfer`] capability, usually
///   [`MemoryBank`](crate::bank::MemoryBank) in tests.
/// - `S`: where committed [`Event`]s go.
/// - `C`: the [`Clock`] stamping issued tokens.
///
/// # Examples
///
/// ```
/// use launchpad_amm::bank::MemoryBank;
/// use launchpad_amm::config::EngineConfig;
/// use launchpad_amm::domain::{AccountId, Amount, Asset, BasisPoints, SwapDirection};
/// use launchpad_amm::events::EventLog;
/// use launchpad_amm::launch::{LaunchRequest, Launchpad};
/// use launchpad_amm::registry::IssueRequest;
/// use launchpad_amm::traits::ManualClock;
///
/// let operator = AccountId::from_bytes([1u8; 32]);
/// let custody = AccountId::from_bytes([2u8; 32]);
/// let alice = AccountId::from_bytes([3u8; 32]);
///
/// let mut bank = MemoryBank::new(custody);
/// bank.deposit(Asset::Reserve, alice, Amount::new(20_000)).expect("funded");
/// let config = EngineConfig::with_accounts(operator, custody).expect("config");
/// let mut pad = Launchpad::new(config, bank, EventLog::new(), ManualClock::new(0)).expect("engine");
///
/// let issue = IssueRequest::new("Fan Token", "FAN", "", Amount::new(100_000)).expect("issue");
/// let request = LaunchRequest::new(issue, alice, Amount::new(10_000), BasisPoints::new(10_000))
///     .expect("request");
/// let launched = pad.launch(request).expect("launched");
///
/// let receipt = pad
///     .swap(alice, launched.token_address(), Amount::new(1_000), SwapDirection::ReserveToToken)
///     .expect("swap");
/// assert_eq!(receipt.output_amount(), Amount::new(9_044));
/// ```
#[derive(Debug)]
pub struct Launchpad<B, S, C = SystemClock> {
    pub(crate) config: EngineConfig,
    pub(crate) registry: Registry,
    pub(crate) pools: PoolLedger,
    pub(crate) bank: B,
    pub(crate) sink: S,
    clock: C,
    last_tx: u64,
}

impl<B, S, C> Launchpad<B, S, C>
where
    B: AssetTransfer,
    S: EventSink,
    C: Clock,
{
    /// Creates an engine with no tokens and no pools.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::InvalidParameter`] if `config` is invalid
    /// or names a custody account other than `bank`'s.
    pub fn new(config: EngineConfig, bank: B, sink: S, clock: C) -> Result<Self> {
        config.validate()?;
        if bank.custody() != config.custody() {
            return Err(LaunchpadError::InvalidParameter(
                "configured custody differs from the transfer capability's",
            ));
        }
        info!(
            fee_rate = %config.fee_rate(),
            liquidity_tolerance = %config.liquidity_tolerance(),
            operator = %config.operator(),
            "launchpad initialised"
        );
        Ok(Self {
            config,
            registry: Registry::new(),
            pools: PoolLedger::new(),
            bank,
            sink,
            clock,
            last_tx: 0,
        })
    }

    // -- accessors ------------------------------------------------------------

    /// Engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read access to issued tokens.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Read access to pools.
    #[must_use]
    pub const fn pools(&self) -> &PoolLedger {
        &self.pools
    }

    /// The transfer capability.
    #[must_use]
    pub const fn bank(&self) -> &B {
        &self.bank
    }

    /// Mutable access to the transfer capability, e.g. to fund wallets.
    pub fn bank_mut(&mut self) -> &mut B {
        &mut self.bank
    }

    /// The event sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the event sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// The clock.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Reference of the most recent committed operation, if any.
    #[must_use]
    pub const fn last_tx_ref(&self) -> Option<TxRef> {
        if self.last_tx == 0 {
            None
        } else {
            Some(TxRef::new(self.last_tx))
        }
    }

    // -- registry queries -------------------------------------------------------

    /// See [`Registry::get_token_info`].
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::TokenNotFound`] for an unknown id.
    pub fn get_token_info(&self, id: TokenId) -> Result<&TokenRecord> {
        self.registry.get_token_info(id)
    }

    /// See [`Registry::get_token_address`].
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::TokenNotFound`] for an unknown id.
    pub fn get_token_address(&self, id: TokenId) -> Result<TokenAddress> {
        self.registry.get_token_address(id)
    }

    /// See [`Registry::get_user_tokens`].
    #[must_use]
    pub fn get_user_tokens(&self, owner: &AccountId) -> &[TokenId] {
        self.registry.get_user_tokens(owner)
    }

    /// See [`Registry::get_total_tokens`].
    #[must_use]
    pub fn get_total_tokens(&self) -> u64 {
        self.registry.get_total_tokens()
    }

    // -- transaction references -------------------------------------------------

    /// Reference the next committed operation will receive.
    pub(crate) fn peek_tx_ref(&self) -> Result<TxRef> {
        self.last_tx
            .checked_add(1)
            .map(TxRef::new)
            .ok_or(LaunchpadError::Overflow("transaction sequence exhausted"))
    }

    pub(crate) fn commit_tx_ref(&mut self, tx_ref: TxRef) {
        self.last_tx = tx_ref.get();
    }

    /// The custody account never trades, provides or issues.
    pub(crate) fn ensure_participant(&self, account: AccountId) -> Result<()> {
        if account == self.config.custody() {
            return Err(LaunchpadError::Unauthorized(account));
        }
        Ok(())
    }

    // -- issuance -----------------------------------------------------------------

    /// Issues a token without a pool and delivers the whole supply to
    /// `owner`.
    ///
    /// The supply is minted into custody, recorded, then paid out; if the
    /// payout fails the record is removed and the supply burned.
    ///
    /// # Errors
    ///
    /// - [`LaunchpadError::InvalidParameter`] for an invalid request.
    /// - [`LaunchpadError::Unauthorized`] if `owner` is the custody account.
    /// - [`LaunchpadError::TransferFailed`] if minting or delivery fails.
    pub fn issue(&mut self, owner: AccountId, request: IssueRequest) -> Result<TokenRecord> {
        request.validate()?;
        self.ensure_participant(owner)?;
        let (token_id, token_address) = self.registry.preview(owner, &request)?;
        let tx_ref = self.peek_tx_ref()?;
        let supply = request.total_supply();

        let mut journal = Journal::new("issue");
        if let Err(err) = journal.mint(&mut self.bank, token_address, supply) {
            return Err(journal.unwind(&mut self.bank, err));
        }
        let record = match self
            .registry
            .issue(request, owner, Amount::ZERO, self.clock.now())
        {
            Ok(record) => record,
            Err(err) => return Err(journal.unwind(&mut self.bank, err)),
        };
        if let Err(err) = self
            .bank
            .transfer_out(Asset::Token(token_address), owner, supply)
        {
            self.registry.rollback_last(token_id);
            return Err(journal.unwind(&mut self.bank, err.into()));
        }

        self.commit_tx_ref(tx_ref);
        info!(
            %tx_ref,
            %token_id,
            token = %token_address,
            %owner,
            symbol = record.metadata().symbol(),
            total_supply = %supply,
            "token issued"
        );
        self.sink.emit(Event::token_created(&record));
        Ok(record)
    }

    /// Issues a token and seeds its pool atomically.
    ///
    /// The owner pays `reserve_amount` of the reserve asset; the full supply
    /// is minted into custody, `pool_share` of it seeds the pool alongside
    /// the reserve and the rest is paid to the owner.  Either all of this
    /// happens or none of it: no token is ever recorded without its pool.
    ///
    /// # Errors
    ///
    /// - [`LaunchpadError::InvalidParameter`] for an invalid request.
    /// - [`LaunchpadError::Unauthorized`] if the owner is the custody account.
    /// - [`LaunchpadError::InsufficientFunds`] if the owner cannot pay.
    /// - [`LaunchpadError::TransferFailed`] if any transfer is refused.
    pub fn launch(&mut self, request: LaunchRequest) -> Result<LaunchReceipt> {
        request.validate()?;
        let (pool_tokens, owner_tokens) = request.split()?;
        let owner = request.owner();
        self.ensure_participant(owner)?;
        let reserve_amount = request.reserve_amount();
        let (token_id, token_address) = self.registry.preview(owner, request.issue())?;
        self.pools.ensure_vacant(&token_address)?;
        let tx_ref = self.peek_tx_ref()?;
        let supply = request.issue().total_supply();

        let mut journal = Journal::new("launch");
        if let Err(err) = journal.pull(&mut self.bank, Asset::Reserve, owner, reserve_amount) {
            return Err(journal.unwind(&mut self.bank, err));
        }
        if let Err(err) = journal.mint(&mut self.bank, token_address, supply) {
            return Err(journal.unwind(&mut self.bank, err));
        }

        let record = match self.registry.issue(
            request.issue().clone(),
            owner,
            reserve_amount,
            self.clock.now(),
        ) {
            Ok(record) => record,
            Err(err) => return Err(journal.unwind(&mut self.bank, err)),
        };
        let pool_info = match self.pools.create(token_address, pool_tokens, reserve_amount) {
            Ok(info) => info,
            Err(err) => {
                self.registry.rollback_last(token_id);
                return Err(journal.unwind(&mut self.bank, err));
            }
        };

        if !owner_tokens.is_zero() {
            if let Err(err) = self
                .bank
                .transfer_out(Asset::Token(token_address), owner, owner_tokens)
            {
                self.pools.remove(&token_address);
                self.registry.rollback_last(token_id);
                return Err(journal.unwind(&mut self.bank, err.into()));
            }
        }

        self.commit_tx_ref(tx_ref);
        info!(
            %tx_ref,
            %token_id,
            token = %token_address,
            %owner,
            pool_tokens = %pool_tokens,
            owner_tokens = %owner_tokens,
            reserve_amount = %reserve_amount,
            "token launched"
        );
        self.sink.emit(Event::token_created(&record));
        self.sink.emit(Event::PoolCreated {
            token: token_address,
            token_amount: pool_info.token_reserves(),
            reserve_amount: pool_info.reserve_reserves(),
        });
        Ok(LaunchReceipt {
            token_id,
            token_address,
            pool_info,
            owner_tokens,
            tx_ref,
        })
    }

    /// Builds a [`LaunchRequest`] from its parts and runs [`launch`](Self::launch).
    ///
    /// # Errors
    ///
    /// Same as [`launch`](Self::launch); a zero `total_supply` is rejected
    /// with [`LaunchpadError::InvalidParameter`] before anything happens.
    pub fn launch_token(
        &mut self,
        owner: AccountId,
        metadata: TokenMetadata,
        total_supply: Amount,
        reserve_amount: Amount,
        pool_share: BasisPoints,
    ) -> Result<LaunchReceipt> {
        let issue = IssueRequest::from_metadata(metadata, total_supply)?;
        self.launch(LaunchRequest::new(issue, owner, reserve_amount, pool_share)?)
    }

    /// Pool reserves for `token`, zeros if it has none.
    #[must_use]
    pub fn get_pool_info(&self, token: &TokenAddress) -> PoolInfo {
        self.pools.get_pool_info(token)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::bank::MemoryBank;
    use crate::error::ErrorKind;
    use crate::events::EventLog;
    use crate::traits::ManualClock;

    type TestPad = Launchpad<MemoryBank, EventLog, ManualClock>;

    // -- helpers --------------------------------------------------------------

    fn operator() -> AccountId {
        AccountId::from_bytes([0x0f; 32])
    }

    fn custody() -> AccountId {
        AccountId::from_bytes([0xcc; 32])
    }

    fn alice() -> AccountId {
        AccountId::from_bytes([0xa1; 32])
    }

    fn make_pad() -> TestPad {
        let mut bank = MemoryBank::new(custody());
        let Ok(_) = bank.deposit(Asset::Reserve, alice(), Amount::new(50_000)) else {
            panic!("deposit");
        };
        let Ok(config) = EngineConfig::with_accounts(operator(), custody()) else {
            panic!("config");
        };
        let Ok(pad) = Launchpad::new(config, bank, EventLog::new(), ManualClock::new(1_000)) else {
            panic!("engine");
        };
        pad
    }

    fn launch_request(supply: u128, reserve: u128, share: u32) -> LaunchRequest {
        let Ok(issue) = IssueRequest::new("Fan Token", "FAN", "ipfs://fan", Amount::new(supply))
        else {
            panic!("issue request");
        };
        let Ok(req) = LaunchRequest::new(issue, alice(), Amount::new(reserve), BasisPoints::new(share))
        else {
            panic!("launch request");
        };
        req
    }

    // -- launch -----------------------------------------------------------------

    #[test]
    fn launch_seeds_pool_and_pays_owner() {
        let mut pad = make_pad();
        let Ok(receipt) = pad.launch(launch_request(1_000_000, 10_000, 8_000)) else {
            panic!("launch");
        };
        let token = receipt.token_address();
        assert_eq!(receipt.token_id(), TokenId::new(0));
        assert_eq!(
            receipt.pool_info(),
            PoolInfo::new(Amount::new(800_000), Amount::new(10_000))
        );
        assert_eq!(pad.get_pool_info(&token), receipt.pool_info());
        assert_eq!(
            pad.bank().balance_of(Asset::Token(token), &alice()),
            Amount::new(200_000)
        );
        assert_eq!(
            pad.bank().balance_of(Asset::Token(token), &custody()),
            Amount::new(800_000)
        );
        assert_eq!(
            pad.bank().balance_of(Asset::Reserve, &alice()),
            Amount::new(40_000)
        );
        assert_eq!(pad.get_user_tokens(&alice()), &[TokenId::new(0)]);
        assert_eq!(pad.last_tx_ref(), Some(receipt.tx_ref()));
    }

    #[test]
    fn launch_records_provenance() {
        let mut pad = make_pad();
        let Ok(receipt) = pad.launch(launch_request(1_000, 500, 10_000)) else {
            panic!("launch");
        };
        let Ok(record) = pad.get_token_info(receipt.token_id()) else {
            panic!("record");
        };
        assert_eq!(record.owner(), alice());
        assert_eq!(record.initial_liquidity(), Amount::new(500));
        assert_eq!(record.created_at().as_secs(), 1_000);
        assert_eq!(record.metadata().image_ref(), "ipfs://fan");
        assert!(receipt.owner_tokens().is_zero());
    }

    #[test]
    fn launch_emits_token_then_pool() {
        let mut pad = make_pad();
        let Ok(receipt) = pad.launch(launch_request(1_000, 500, 10_000)) else {
            panic!("launch");
        };
        let events = pad.sink().events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name(), "TokenCreated");
        assert_eq!(
            events[1],
            Event::PoolCreated {
                token: receipt.token_address(),
                token_amount: Amount::new(1_000),
                reserve_amount: Amount::new(500),
            }
        );
    }

    #[test]
    fn launch_zero_supply_leaves_registry_untouched() {
        let mut pad = make_pad();
        let Ok(meta) = TokenMetadata::new("Fan Token", "FAN", "") else {
            panic!("metadata");
        };
        let Err(e) = pad.launch_token(
            alice(),
            meta,
            Amount::ZERO,
            Amount::new(100),
            BasisPoints::new(5_000),
        ) else {
            panic!("expected error");
        };
        assert_eq!(e.kind(), ErrorKind::InvalidParameter);
        assert_eq!(pad.get_total_tokens(), 0);
        assert!(pad.sink().is_empty());
    }

    #[test]
    fn unfunded_launch_changes_nothing() {
        let mut pad = make_pad();
        let result = pad.launch(launch_request(1_000, 60_000, 5_000));
        let Err(e) = result else {
            panic!("expected error");
        };
        assert_eq!(e.kind(), ErrorKind::InsufficientFunds);
        assert_eq!(pad.get_total_tokens(), 0);
        assert!(pad.pools().is_empty());
        assert_eq!(
            pad.bank().balance_of(Asset::Reserve, &alice()),
            Amount::new(50_000)
        );
        assert_eq!(pad.last_tx_ref(), None);
    }

    #[test]
    fn refused_owner_payout_rolls_back_everything() {
        let mut pad = make_pad();
        let request = launch_request(1_000, 500, 5_000);
        let Ok((_, address)) = pad.registry().preview(alice(), request.issue()) else {
            panic!("preview");
        };
        pad.bank_mut().refuse_payouts(Asset::Token(address), alice());
        let Err(e) = pad.launch(request) else {
            panic!("expected error");
        };
        assert_eq!(e.kind(), ErrorKind::TransferFailed);
        assert_eq!(pad.get_total_tokens(), 0);
        assert!(pad.pools().is_empty());
        assert!(pad.get_user_tokens(&alice()).is_empty());
        assert!(pad.bank().supply_of(Asset::Token(address)).is_zero());
        assert_eq!(
            pad.bank().balance_of(Asset::Reserve, &alice()),
            Amount::new(50_000)
        );
        assert!(pad.sink().is_empty());
        assert_eq!(pad.last_tx_ref(), None);
    }

    #[test]
    fn second_launch_gets_next_id() {
        let mut pad = make_pad();
        let Ok(a) = pad.launch(launch_request(1_000, 500, 5_000)) else {
            panic!("launch a");
        };
        let Ok(b) = pad.launch(launch_request(1_000, 500, 5_000)) else {
            panic!("launch b");
        };
        assert_eq!(b.token_id(), TokenId::new(1));
        assert_ne!(a.token_address(), b.token_address());
        assert!(b.tx_ref() > a.tx_ref());
    }

    // -- issue ------------------------------------------------------------------

    #[test]
    fn issue_delivers_supply_without_pool() {
        let mut pad = make_pad();
        let Ok(req) = IssueRequest::new("Solo", "SOLO", "", Amount::new(5_000)) else {
            panic!("request");
        };
        let Ok(record) = pad.issue(alice(), req) else {
            panic!("issue");
        };
        assert_eq!(
            pad.bank().balance_of(Asset::Token(record.address()), &alice()),
            Amount::new(5_000)
        );
        assert!(!pad.get_pool_info(&record.address()).exists());
        assert_eq!(pad.sink().events(), &[Event::token_created(&record)]);
    }

    #[test]
    fn refused_issue_burns_supply() {
        let mut pad = make_pad();
        let Ok(req) = IssueRequest::new("Solo", "SOLO", "", Amount::new(5_000)) else {
            panic!("request");
        };
        let Ok((_, address)) = pad.registry().preview(alice(), &req) else {
            panic!("preview");
        };
        pad.bank_mut().refuse_payouts(Asset::Token(address), alice());
        assert!(pad.issue(alice(), req).is_err());
        assert_eq!(pad.get_total_tokens(), 0);
        assert!(pad.bank().supply_of(Asset::Token(address)).is_zero());
    }

    #[test]
    fn custody_cannot_launch_or_issue() {
        let mut pad = make_pad();
        let Ok(issue) = IssueRequest::new("Fan Token", "FAN", "", Amount::new(1_000)) else {
            panic!("issue request");
        };
        assert_eq!(
            pad.issue(custody(), issue.clone()),
            Err(LaunchpadError::Unauthorized(custody()))
        );
        let Ok(req) = LaunchRequest::new(issue, custody(), Amount::new(500), BasisPoints::new(5_000))
        else {
            panic!("launch request");
        };
        assert_eq!(pad.launch(req), Err(LaunchpadError::Unauthorized(custody())));
        assert_eq!(pad.get_total_tokens(), 0);
        assert!(pad.sink().is_empty());
    }

    #[test]
    fn mismatched_bank_custody_rejected() {
        let bank = MemoryBank::new(alice());
        let Ok(config) = EngineConfig::with_accounts(operator(), custody()) else {
            panic!("config");
        };
        let result = Launchpad::new(config, bank, EventLog::new(), ManualClock::new(0));
        let Err(e) = result else {
            panic!("expected error");
        };
        assert_eq!(e.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn invalid_config_rejected() {
        let bank = MemoryBank::new(custody());
        let Ok(config) = serde_json::from_value::<EngineConfig>(serde_json::json!({
            "fee_rate": 10_000,
            "liquidity_tolerance": 100,
            "operator": operator().to_string(),
            "custody": custody().to_string(),
        })) else {
            panic!("deserialize");
        };
        let result = Launchpad::new(config, bank, EventLog::new(), ManualClock::new(0));
        assert!(result.is_err());
    }
}
