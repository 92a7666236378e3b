//! Pool Ledger: per-token constant-product reserve pairs.
//!
//! [`PoolLedger`] is the only owner of [`Pool`] state.  Mutating access is
//! crate-private; outside callers go through the
//! [`Launchpad`](crate::launch::Launchpad), which pairs every reserve change
//! with the matching asset transfer.

mod ledger;
mod pool;

pub use ledger::PoolLedger;
pub use pool::Pool;
