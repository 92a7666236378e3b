//! The external asset-movement capability.
//!
//! [`AssetTransfer`] is the engine's only window onto balances.  It is
//! implemented by whatever ledger substrate hosts the engine; the crate
//! ships [`MemoryBank`](crate::bank::MemoryBank) for tests and demos.
//!
//! # Custody
//!
//! Transfers are always relative to the engine's own custody account:
//! `transfer_in` moves from a participant into custody, `transfer_out`
//! moves from custody to a participant, and `mint`/`burn` create or
//! destroy token supply inside custody.  [`AssetTransfer::refund`] returns
//! funds pulled earlier in the same operation; recipients cannot refuse it.
//!
//! # Atomicity
//!
//! Each call is atomic on its own: it either moves the full amount or
//! fails without side effects.  Composing several calls into one
//! all-or-nothing operation is the engine's job.

use crate::domain::{AccountId, Amount, Asset, TokenAddress};
use crate::error::LaunchpadError;

/// Why a single transfer was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    /// The debited account holds less than requested.
    #[error("{account} holds {available} of {asset}, needs {needed}")]
    InsufficientFunds {
        /// Asset being moved.
        asset: Asset,
        /// Debited account.
        account: AccountId,
        /// Amount requested.
        needed: Amount,
        /// Amount held.
        available: Amount,
    },
    /// The substrate refused the movement for another reason.
    #[error("transfer of {asset} rejected: {reason}")]
    Rejected {
        /// Asset being moved.
        asset: Asset,
        /// Human-readable reason.
        reason: String,
    },
}

impl From<TransferError> for LaunchpadError {
    fn from(err: TransferError) -> Self {
        match err {
            TransferError::InsufficientFunds {
                asset,
                account,
                needed,
                available,
            } => Self::InsufficientFunds {
                asset,
                account,
                needed,
                available,
            },
            TransferError::Rejected { asset, reason } => Self::TransferFailed { asset, reason },
        }
    }
}

/// Fallible, individually atomic asset movements relative to custody.
pub trait AssetTransfer {
    /// The engine's own account.  Participants never act as it.
    fn custody(&self) -> AccountId;

    /// Moves `amount` of `asset` from `from` into custody.
    ///
    /// # Errors
    ///
    /// [`TransferError::InsufficientFunds`] if `from` cannot cover it, or
    /// [`TransferError::Rejected`] for any other refusal.
    fn transfer_in(
        &mut self,
        asset: Asset,
        from: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Moves `amount` of `asset` from custody to `to`.
    ///
    /// # Errors
    ///
    /// [`TransferError::InsufficientFunds`] if custody cannot cover it, or
    /// [`TransferError::Rejected`] if the recipient refuses.
    fn transfer_out(
        &mut self,
        asset: Asset,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Returns `amount` of `asset` pulled from `to` earlier in the same
    /// operation.
    ///
    /// Unlike [`transfer_out`](Self::transfer_out) this is a compensation,
    /// not a payout: recipient-side refusals do not apply.
    ///
    /// # Errors
    ///
    /// [`TransferError::InsufficientFunds`] if custody no longer holds it.
    fn refund(&mut self, asset: Asset, to: AccountId, amount: Amount) -> Result<(), TransferError>;

    /// Creates `amount` of a new token in custody.
    ///
    /// # Errors
    ///
    /// [`TransferError::Rejected`] if the token cannot be created.
    fn mint(&mut self, token: TokenAddress, amount: Amount) -> Result<(), TransferError>;

    /// Destroys `amount` of `token` held in custody.
    ///
    /// # Errors
    ///
    /// [`TransferError::InsufficientFunds`] if custody holds less.
    fn burn(&mut self, token: TokenAddress, amount: Amount) -> Result<(), TransferError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn insufficient_funds_maps_to_kind() {
        let err: LaunchpadError = TransferError::InsufficientFunds {
            asset: Asset::Reserve,
            account: AccountId::zero(),
            needed: Amount::new(2),
            available: Amount::new(1),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::InsufficientFunds);
    }

    #[test]
    fn rejected_maps_to_transfer_failed() {
        let err: LaunchpadError = TransferError::Rejected {
            asset: Asset::Reserve,
            reason: "frozen".to_owned(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::TransferFailed);
        assert!(err.to_string().contains("frozen"));
    }
}
