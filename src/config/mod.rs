//! Engine configuration.
//!
//! [`EngineConfig`] is the declarative set of parameters a
//! [`Launchpad`](crate::launch::Launchpad) is built from: the global fee
//! rate, the add-liquidity tolerance, and the operator and custody
//! accounts.  It is validated on construction and again after
//! deserialization.

mod engine_config;

pub use engine_config::{EngineConfig, DEFAULT_LIQUIDITY_TOLERANCE};
