//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use launchpad_amm::prelude::*;
//! ```
//!
//! Brings the engine, its configuration, the host seams with their
//! in-memory implementations, the request types and the common domain
//! values into scope with one import.

pub use crate::domain::{
    AccountId, Amount, Asset, BasisPoints, Event, FeeRate, PoolInfo, Quote, SwapDirection,
    SwapReceipt, Timestamp, TokenAddress, TokenId, TokenMetadata, TokenRecord, TxRef,
};

pub use crate::traits::{AssetTransfer, Clock, EventSink, ManualClock, SystemClock};

pub use crate::config::EngineConfig;

pub use crate::error::{LaunchpadError, Result};

pub use crate::launch::{LaunchReceipt, LaunchRequest, Launchpad};
pub use crate::registry::IssueRequest;

pub use crate::bank::MemoryBank;
pub use crate::events::{EventLog, TracingSink};
