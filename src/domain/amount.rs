//! Raw asset amount with checked arithmetic.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Rounding;

/// A raw amount of a token or of the reserve asset, in its smallest unit.
///
/// Both sides of every pool use 18 decimal places, so `1` whole unit is
/// `10^18` raw units (see [`Amount::ONE_UNIT`]).  `Amount` never rescales;
/// all `u128` values are valid.
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow, or division by zero instead of panicking.
///
/// # Examples
///
/// ```
/// use launchpad_amm::domain::{Amount, Rounding};
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// assert_eq!(Amount::units(2).get(), 2_000_000_000_000_000_000);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Number of decimal places carried by every asset.
    pub const DECIMALS: u32 = 18;

    /// One whole unit (`10^18` raw units).
    pub const ONE_UNIT: Self = Self(1_000_000_000_000_000_000);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Creates an amount of `whole` units, saturating at [`Amount::MAX`].
    pub const fn units(whole: u64) -> Self {
        Self((whole as u128).saturating_mul(Self::ONE_UNIT.0))
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    ///
    /// Curve math does not use this; it widens to 256 bits through
    /// [`mul_div`](crate::math::mul_div) instead.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked division with explicit rounding direction.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        if divisor.0 == 0 {
            return None;
        }
        let q = self.0 / divisor.0;
        if rounding.bumps(self.0 % divisor.0 != 0) {
            // q < u128::MAX whenever there is a remainder
            Some(Self(q + 1))
        } else {
            Some(Self(q))
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
