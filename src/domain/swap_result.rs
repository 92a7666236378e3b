//! Outcome of pricing and executing a swap.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Price, SwapDirection, TxRef};
use crate::error::Result;

/// A priced, not yet executed swap.
///
/// # Invariants
///
/// - `amount_out + fee == amount_before_fee`
/// - `amount_before_fee < reserve_out` of the pool it was priced against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    pub(crate) direction: SwapDirection,
    pub(crate) amount_in: Amount,
    pub(crate) amount_before_fee: Amount,
    pub(crate) fee: Amount,
    pub(crate) amount_out: Amount,
}

impl Quote {
    /// Direction the quote was priced for.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Amount the caller pays in.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Curve output before the fee is withheld (already floored).
    pub const fn amount_before_fee(&self) -> Amount {
        self.amount_before_fee
    }

    /// Part of the curve output retained by the pool.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Amount the caller receives.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Realized price as `amount_out / amount_in`.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::DivisionByZero`](crate::error::LaunchpadError::DivisionByZero)
    /// if `amount_in` is zero.
    pub fn effective_price(&self) -> Result<Price> {
        Price::from_amounts(self.amount_out, self.amount_in)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quote({}: in={}, out={}, fee={})",
            self.direction, self.amount_in, self.amount_out, self.fee
        )
    }
}

/// Result of a committed swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapReceipt {
    pub(crate) tx_ref: TxRef,
    pub(crate) quote: Quote,
}

impl SwapReceipt {
    /// Reference of the committed operation.
    #[must_use]
    pub const fn tx_ref(&self) -> TxRef {
        self.tx_ref
    }

    /// Amount paid out to the caller.
    pub const fn output_amount(&self) -> Amount {
        self.quote.amount_out
    }

    /// Amount pulled from the caller.
    pub const fn input_amount(&self) -> Amount {
        self.quote.amount_in
    }

    /// Fee retained by the pool.
    pub const fn fee(&self) -> Amount {
        self.quote.fee
    }

    /// The pricing the swap executed at.
    #[must_use]
    pub const fn quote(&self) -> &Quote {
        &self.quote
    }
}

impl fmt::Display for SwapReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SwapReceipt({}, {})", self.tx_ref, self.quote)
    }
}
