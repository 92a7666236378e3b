//! Fundamental domain value types used throughout the engine.
//!
//! Amounts, rates, identities, token records, pool snapshots, quotes and
//! events.  All types are newtypes or plain records with validated
//! constructors where an invariant exists.

mod address;
mod amount;
mod asset;
mod basis_points;
mod event;
mod fee_rate;
mod ids;
mod pool_info;
mod price;
mod rounding;
mod swap_result;
mod token;

pub use address::{AccountId, ParseAddressError, TokenAddress};
pub use amount::Amount;
pub use asset::{Asset, SwapDirection};
pub use basis_points::{BasisPoints, BPS_DENOMINATOR};
pub use event::Event;
pub use fee_rate::FeeRate;
pub use ids::{Timestamp, TokenId, TxRef};
pub use pool_info::PoolInfo;
pub use price::Price;
pub use rounding::Rounding;
pub use swap_result::{Quote, SwapReceipt};
pub use token::{TokenMetadata, TokenRecord};
