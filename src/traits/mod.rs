//! Seams between the engine and its host.
//!
//! - [`AssetTransfer`] moves assets in and out of the engine's custody.
//! - [`EventSink`] receives committed events.
//! - [`Clock`] stamps issued tokens.

mod asset_transfer;
mod clock;
mod event_sink;

pub use asset_transfer::{AssetTransfer, TransferError};
pub use clock::{Clock, ManualClock, SystemClock};
pub use event_sink::EventSink;
