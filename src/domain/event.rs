//! Events published to off-core observers.

use serde::Serialize;

use super::{AccountId, Amount, SwapDirection, TokenAddress, TokenId, TokenRecord, TxRef};

/// A state change observers (indexers, UIs) can subscribe to.
///
/// Each variant has fixed fields; events are emitted only after the
/// operation that produced them has committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A token was issued.
    TokenCreated {
        /// Registry id.
        token_id: TokenId,
        /// Address of the token instance.
        token_address: TokenAddress,
        /// Issuing account.
        owner: AccountId,
        /// Token name.
        name: String,
        /// Ticker symbol.
        symbol: String,
        /// Fixed supply.
        total_supply: Amount,
    },
    /// A pool was created and seeded.
    PoolCreated {
        /// Token the pool trades.
        token: TokenAddress,
        /// Seeded token reserve.
        token_amount: Amount,
        /// Seeded reserve-asset reserve.
        reserve_amount: Amount,
    },
    /// Liquidity was added to an existing pool.
    LiquidityAdded {
        /// Token the pool trades.
        token: TokenAddress,
        /// Tokens deposited.
        token_amount: Amount,
        /// Reserve asset deposited.
        reserve_amount: Amount,
    },
    /// A swap executed.
    SwapExecuted {
        /// Trader.
        user: AccountId,
        /// Token the pool trades.
        token: TokenAddress,
        /// Amount paid in.
        input_amount: Amount,
        /// Amount paid out.
        output_amount: Amount,
        /// Side paid into.
        direction: SwapDirection,
        /// Reference of the swap.
        tx_ref: TxRef,
    },
    /// The operator toggled trading for a token.
    SupportChanged {
        /// Token the pool trades.
        token: TokenAddress,
        /// New value of the flag.
        supported: bool,
    },
}

impl Event {
    /// Builds the [`Event::TokenCreated`] announcement for `record`.
    #[must_use]
    pub fn token_created(record: &TokenRecord) -> Self {
        Self::TokenCreated {
            token_id: record.id(),
            token_address: record.address(),
            owner: record.owner(),
            name: record.metadata().name().to_owned(),
            symbol: record.metadata().symbol().to_owned(),
            total_supply: record.total_supply(),
        }
    }

    /// Short name of the variant, for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TokenCreated { .. } => "TokenCreated",
            Self::PoolCreated { .. } => "PoolCreated",
            Self::LiquidityAdded { .. } => "LiquidityAdded",
            Self::SwapExecuted { .. } => "SwapExecuted",
            Self::SupportChanged { .. } => "SupportChanged",
        }
    }
}
