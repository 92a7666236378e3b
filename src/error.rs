//! Unified error types for the launchpad engine.
//!
//! Every fallible operation in the crate returns [`LaunchpadError`].  Each
//! variant carries enough context (token, account, amounts) to diagnose the
//! failure, and [`LaunchpadError::kind`] collapses the variants onto the
//! coarse [`ErrorKind`] a request layer maps to user-facing messages.

use thiserror::Error;

use crate::domain::{AccountId, Amount, Asset, TokenAddress, TokenId};

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, LaunchpadError>;

/// Coarse classification of a [`LaunchpadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed, zero or out-of-range input.
    InvalidParameter,
    /// Unknown token id or pool.
    NotFound,
    /// A pool already exists for the token.
    AlreadyExists,
    /// Supplied liquidity does not match the pool ratio.
    InsufficientAmount,
    /// The swap would exceed the available reserve.
    InsufficientLiquidity,
    /// The external transfer capability refused a movement.
    TransferFailed,
    /// The paying account does not hold enough of the asset.
    InsufficientFunds,
    /// The token is not enabled for trading.
    Unsupported,
    /// The caller is not allowed to perform the operation.
    Unauthorized,
    /// Executed output fell below the caller's minimum.
    SlippageExceeded,
    /// Arithmetic overflow or division by zero.
    Arithmetic,
}

/// Errors surfaced by the registry, the pool ledger and the exchange engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchpadError {
    /// Input rejected before any state was touched.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// No token was issued with this id.
    #[error("token #{0} not found")]
    TokenNotFound(TokenId),

    /// No (enabled) pool exists for this token.
    #[error("no pool for token {0}")]
    PoolNotFound(TokenAddress),

    /// A pool was already created for this token.
    #[error("pool already exists for token {0}")]
    PoolAlreadyExists(TokenAddress),

    /// The deposited pair does not respect the pool's price ratio.
    #[error("insufficient amount for {token}: provided {provided}, required {required}")]
    InsufficientAmount {
        /// Pool the deposit targeted.
        token: TokenAddress,
        /// Amount supplied on the short side.
        provided: Amount,
        /// Amount the current ratio requires on that side.
        required: Amount,
    },

    /// The swap cannot be served by the opposing reserve.
    #[error("insufficient liquidity in {token}: requested {requested}, available {available}")]
    InsufficientLiquidity {
        /// Pool the swap targeted.
        token: TokenAddress,
        /// Amount that would have to leave (or be matched by) the reserve.
        requested: Amount,
        /// Current opposing reserve.
        available: Amount,
    },

    /// The transfer capability rejected the movement.
    #[error("transfer of {asset} failed: {reason}")]
    TransferFailed {
        /// Asset being moved.
        asset: Asset,
        /// Reason reported by the capability.
        reason: String,
    },

    /// The paying account cannot cover the transfer.
    #[error("{account} holds {available} of {asset}, needs {needed}")]
    InsufficientFunds {
        /// Asset being moved.
        asset: Asset,
        /// Account that was debited.
        account: AccountId,
        /// Amount requested.
        needed: Amount,
        /// Balance actually held.
        available: Amount,
    },

    /// Trading and liquidity operations are disabled for the token.
    #[error("token {0} is not enabled for trading")]
    Unsupported(TokenAddress),

    /// Caller lacks the operator role.
    #[error("account {0} is not authorized")]
    Unauthorized(AccountId),

    /// Output would be lower than the caller accepted.
    #[error("slippage exceeded: minimum {minimum}, actual {actual}")]
    SlippageExceeded {
        /// Floor requested by the caller.
        minimum: Amount,
        /// Output the pool would deliver.
        actual: Amount,
    },

    /// Checked arithmetic overflowed.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Division by a zero reserve or denominator.
    #[error("division by zero")]
    DivisionByZero,
}

impl LaunchpadError {
    /// Returns the coarse [`ErrorKind`] of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameter(_) => ErrorKind::InvalidParameter,
            Self::TokenNotFound(_) | Self::PoolNotFound(_) => ErrorKind::NotFound,
            Self::PoolAlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::InsufficientAmount { .. } => ErrorKind::InsufficientAmount,
            Self::InsufficientLiquidity { .. } => ErrorKind::InsufficientLiquidity,
            Self::TransferFailed { .. } => ErrorKind::TransferFailed,
            Self::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            Self::Unsupported(_) => ErrorKind::Unsupported,
            Self::Unauthorized(_) => ErrorKind::Unauthorized,
            Self::SlippageExceeded { .. } => ErrorKind::SlippageExceeded,
            Self::Overflow(_) | Self::DivisionByZero => ErrorKind::Arithmetic,
        }
    }
}
