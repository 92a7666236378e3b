//! In-memory ledger substrate.
//!
//! [`MemoryBank`] keeps balances per `(asset, account)` and implements
//! [`AssetTransfer`] against a single custody account.  It backs the tests
//! and the demo; a production host plugs its own ledger into the same
//! trait.

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::domain::{AccountId, Amount, Asset, TokenAddress};
use crate::error::{LaunchpadError, Result};
use crate::traits::{AssetTransfer, TransferError};

/// Balance book with an engine-owned custody account.
///
/// An account can be marked as refusing payouts of one asset, which makes
/// [`AssetTransfer::transfer_out`] of that asset to it fail with
/// [`TransferError::Rejected`]; tests use this to drive rollbacks.
/// [`AssetTransfer::refund`] ignores the mark.
///
/// # Examples
///
/// ```
/// use launchpad_amm::bank::MemoryBank;
/// use launchpad_amm::domain::{AccountId, Amount, Asset};
///
/// let mut bank = MemoryBank::new(AccountId::from_bytes([9u8; 32]));
/// let alice = AccountId::from_bytes([1u8; 32]);
/// bank.deposit(Asset::Reserve, alice, Amount::new(500)).expect("credit");
/// assert_eq!(bank.balance_of(Asset::Reserve, &alice), Amount::new(500));
/// ```
#[derive(Debug, Clone)]
pub struct MemoryBank {
    custody: AccountId,
    balances: BTreeMap<(Asset, AccountId), Amount>,
    refusing: BTreeSet<(Asset, AccountId)>,
}

impl MemoryBank {
    /// Creates an empty bank whose engine account is `custody`.
    #[must_use]
    pub fn new(custody: AccountId) -> Self {
        Self {
            custody,
            balances: BTreeMap::new(),
            refusing: BTreeSet::new(),
        }
    }

    /// Credits `amount` of `asset` to `account` out of thin air and returns
    /// the new balance.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::Overflow`] if the balance would overflow.
    pub fn deposit(&mut self, asset: Asset, account: AccountId, amount: Amount) -> Result<Amount> {
        self.credit(asset, account, amount)
            .map_err(|_| LaunchpadError::Overflow("balance overflow"))
    }

    /// Balance of `asset` held by `account`.
    #[must_use]
    pub fn balance_of(&self, asset: Asset, account: &AccountId) -> Amount {
        self.balances
            .get(&(asset, *account))
            .copied()
            .unwrap_or_default()
    }

    /// Sum of all balances of `asset`.
    #[must_use]
    pub fn supply_of(&self, asset: Asset) -> Amount {
        self.balances
            .iter()
            .filter(|((a, _), _)| *a == asset)
            .fold(Amount::ZERO, |acc, (_, v)| {
                acc.checked_add(v).unwrap_or(Amount::MAX)
            })
    }

    /// Makes every payout of `asset` to `account` fail.
    pub fn refuse_payouts(&mut self, asset: Asset, account: AccountId) {
        self.refusing.insert((asset, account));
    }

    /// Lifts a previous [`refuse_payouts`](Self::refuse_payouts).
    pub fn accept_payouts(&mut self, asset: Asset, account: AccountId) {
        self.refusing.remove(&(asset, account));
    }

    fn credit(
        &mut self,
        asset: Asset,
        account: AccountId,
        amount: Amount,
    ) -> core::result::Result<Amount, TransferError> {
        let balance = self.balance_of(asset, &account);
        let updated = balance
            .checked_add(&amount)
            .ok_or_else(|| TransferError::Rejected {
                asset,
                reason: "balance overflow".to_owned(),
            })?;
        self.balances.insert((asset, account), updated);
        Ok(updated)
    }

    fn debit(
        &mut self,
        asset: Asset,
        account: AccountId,
        amount: Amount,
    ) -> core::result::Result<(), TransferError> {
        let available = self.balance_of(asset, &account);
        let Some(remaining) = available.checked_sub(&amount) else {
            return Err(TransferError::InsufficientFunds {
                asset,
                account,
                needed: amount,
                available,
            });
        };
        if remaining.is_zero() {
            self.balances.remove(&(asset, account));
        } else {
            self.balances.insert((asset, account), remaining);
        }
        Ok(())
    }

    /// Debits `from` and credits `to`, restoring `from` if the credit fails.
    fn move_funds(
        &mut self,
        asset: Asset,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> core::result::Result<(), TransferError> {
        self.debit(asset, from, amount)?;
        if let Err(err) = self.credit(asset, to, amount) {
            // the debit just removed exactly `amount`, so this cannot overflow
            let _ = self.credit(asset, from, amount);
            return Err(err);
        }
        trace!(%asset, %from, %to, %amount, "funds moved");
        Ok(())
    }
}

impl AssetTransfer for MemoryBank {
    fn custody(&self) -> AccountId {
        self.custody
    }

    fn transfer_in(
        &mut self,
        asset: Asset,
        from: AccountId,
        amount: Amount,
    ) -> core::result::Result<(), TransferError> {
        self.move_funds(asset, from, self.custody, amount)
    }

    fn transfer_out(
        &mut self,
        asset: Asset,
        to: AccountId,
        amount: Amount,
    ) -> core::result::Result<(), TransferError> {
        if self.refusing.contains(&(asset, to)) {
            return Err(TransferError::Rejected {
                asset,
                reason: format!("{to} refuses payouts"),
            });
        }
        self.move_funds(asset, self.custody, to, amount)
    }

    fn refund(
        &mut self,
        asset: Asset,
        to: AccountId,
        amount: Amount,
    ) -> core::result::Result<(), TransferError> {
        self.move_funds(asset, self.custody, to, amount)
    }

    fn mint(&mut self, token: TokenAddress, amount: Amount) -> core::result::Result<(), TransferError> {
        let _balance = self.credit(Asset::Token(token), self.custody, amount)?;
        trace!(%token, %amount, "minted into custody");
        Ok(())
    }

    fn burn(&mut self, token: TokenAddress, amount: Amount) -> core::result::Result<(), TransferError> {
        self.debit(Asset::Token(token), self.custody, amount)?;
        trace!(%token, %amount, "burned from custody");
        Ok(())
    }
}
