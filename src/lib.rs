//! # Launchpad AMM
//!
//! Token launchpad engine: issue fungible tokens, seed each with a
//! constant-product pool against a single reserve asset, and trade against
//! those pools.
//!
//! Every state change goes through one [`Launchpad`](launch::Launchpad)
//! value.  Asset movements are delegated to an
//! [`AssetTransfer`](traits::AssetTransfer) implementation, committed
//! events go to an [`EventSink`](traits::EventSink), and each operation
//! either completes fully or leaves no trace.
//!
//! ## Launch a token and buy from its pool
//!
//! ```rust
//! use launchpad_amm::prelude::*;
//!
//! let operator = AccountId::from_bytes([1u8; 32]);
//! let custody = AccountId::from_bytes([2u8; 32]);
//! let alice = AccountId::from_bytes([3u8; 32]);
//! let bob = AccountId::from_bytes([4u8; 32]);
//!
//! // 1. Fund wallets with the reserve asset
//! let mut bank = MemoryBank::new(custody);
//! bank.deposit(Asset::Reserve, alice, Amount::new(10_000)).expect("funded");
//! bank.deposit(Asset::Reserve, bob, Amount::new(5_000)).expect("funded");
//!
//! // 2. Build the engine with the default 0.5% fee
//! let config = EngineConfig::with_accounts(operator, custody).expect("valid config");
//! let mut pad = Launchpad::new(config, bank, EventLog::new(), ManualClock::new(0))
//!     .expect("engine");
//!
//! // 3. Launch: the whole supply seeds the pool next to 10 000 reserve units
//! let issue = IssueRequest::new("Fan Token", "FAN", "ipfs://fan", Amount::new(100_000))
//!     .expect("valid metadata");
//! let request = LaunchRequest::new(issue, alice, Amount::new(10_000), BasisPoints::new(10_000))
//!     .expect("valid request");
//! let launched = pad.launch(request).expect("launched");
//!
//! // 4. Bob buys with 1 000 reserve units
//! let receipt = pad
//!     .swap_reserve_for_token(bob, launched.token_address(), Amount::new(1_000))
//!     .expect("swap succeeded");
//!
//! assert_eq!(receipt.output_amount(), Amount::new(9_044));
//! assert_eq!(
//!     pad.get_pool_info(&launched.token_address()),
//!     PoolInfo::new(Amount::new(90_956), Amount::new(11_000)),
//! );
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer   │  EngineConfig + AssetTransfer + EventSink + Clock
//! └──────┬───────┘
//!        │ &mut Launchpad
//!        ▼
//! ┌──────────────┐
//! │  Launchpad   │  validate, journal transfers, commit, pay out, emit
//! └──┬────────┬──┘
//!    │        │
//!    ▼        ▼
//! ┌────────┐ ┌────────────┐
//! │Registry│ │ PoolLedger │  token records / reserve pairs
//! └────────┘ └─────┬──────┘
//!                  │ quote_exact_in
//!                  ▼
//!            ┌────────────┐
//!            │    Math    │  checked + wide arithmetic
//!            └────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`TokenAddress`](domain::TokenAddress), [`Event`](domain::Event), etc. |
//! | [`traits`] | Host seams: [`AssetTransfer`](traits::AssetTransfer), [`EventSink`](traits::EventSink), [`Clock`](traits::Clock) |
//! | [`config`] | [`EngineConfig`](config::EngineConfig): fee, tolerance, operator and custody accounts |
//! | [`registry`] | [`Registry`](registry::Registry) of issued tokens |
//! | [`pools`] | [`PoolLedger`](pools::PoolLedger) of constant-product reserve pairs |
//! | [`launch`] | [`Launchpad`](launch::Launchpad): issuance and atomic launch |
//! | [`exchange`] | Pool creation, liquidity, quotes and swaps on [`Launchpad`](launch::Launchpad) |
//! | [`bank`] | [`MemoryBank`](bank::MemoryBank), an in-memory [`AssetTransfer`](traits::AssetTransfer) |
//! | [`events`] | [`EventLog`](events::EventLog) and [`TracingSink`](events::TracingSink) |
//! | [`math`] | Checked arithmetic, wide intermediates, curve pricing |
//! | [`error`] | [`LaunchpadError`](error::LaunchpadError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod bank;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod exchange;
pub mod launch;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod registry;
pub mod traits;
