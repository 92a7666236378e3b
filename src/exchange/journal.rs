//! Compensation log for multi-step operations.
//!
//! Every external effect an operation performs before it commits is
//! recorded here.  If a later step fails, [`Journal::unwind`] reverses the
//! effects newest first, leaving balances as they were before the call.

use tracing::{error, warn};

use crate::domain::{AccountId, Amount, Asset, TokenAddress};
use crate::error::{LaunchpadError, Result};
use crate::traits::AssetTransfer;

/// A reversible external effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Effect {
    /// Funds pulled from `from` into custody; undone by refunding them.
    Pulled {
        asset: Asset,
        from: AccountId,
        amount: Amount,
    },
    /// Supply created in custody; undone by burning it.
    Minted { token: TokenAddress, amount: Amount },
}

#[derive(Debug)]
pub(crate) struct Journal {
    operation: &'static str,
    effects: Vec<Effect>,
}

impl Journal {
    pub(crate) const fn new(operation: &'static str) -> Self {
        Self {
            operation,
            effects: Vec::new(),
        }
    }

    /// Pulls `amount` of `asset` from `from` and records it.
    pub(crate) fn pull<B: AssetTransfer>(
        &mut self,
        bank: &mut B,
        asset: Asset,
        from: AccountId,
        amount: Amount,
    ) -> Result<()> {
        bank.transfer_in(asset, from, amount)?;
        self.effects.push(Effect::Pulled {
            asset,
            from,
            amount,
        });
        Ok(())
    }

    /// Mints `amount` of `token` into custody and records it.
    pub(crate) fn mint<B: AssetTransfer>(
        &mut self,
        bank: &mut B,
        token: TokenAddress,
        amount: Amount,
    ) -> Result<()> {
        bank.mint(token, amount)?;
        self.effects.push(Effect::Minted { token, amount });
        Ok(())
    }

    /// Reverses every recorded effect and hands `cause` back.
    ///
    /// A compensating step that fails is logged and skipped; the remaining
    /// steps still run.
    pub(crate) fn unwind<B: AssetTransfer>(
        self,
        bank: &mut B,
        cause: LaunchpadError,
    ) -> LaunchpadError {
        if !self.effects.is_empty() {
            warn!(
                operation = self.operation,
                effects = self.effects.len(),
                error = %cause,
                "operation failed after external effects, unwinding"
            );
        }
        for effect in self.effects.into_iter().rev() {
            let outcome = match effect {
                Effect::Pulled {
                    asset,
                    from,
                    amount,
                } => bank.refund(asset, from, amount),
                Effect::Minted { token, amount } => bank.burn(token, amount),
            };
            if let Err(err) = outcome {
                error!(
                    operation = self.operation,
                    ?effect,
                    error = %err,
                    "compensating transfer failed"
                );
            }
        }
        cause
    }
}
