//! Display-oriented exchange rate.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::{LaunchpadError, Result};

/// Ratio between two raw amounts, as an `f64`.
///
/// Used only for reporting (spot price, realized price); execution math
/// stays in integers.  Since both sides carry 18 decimals the ratio of
/// raw amounts equals the ratio of whole units.
///
/// # Examples
///
/// ```
/// use launchpad_amm::domain::{Amount, Price};
///
/// let p = Price::from_amounts(Amount::new(10_000), Amount::new(100_000)).expect("non-zero");
/// assert!((p.get() - 0.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Price ratio of zero.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Price`.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::InvalidParameter`] if the value is negative,
    /// NaN, or infinite.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(LaunchpadError::InvalidParameter(
                "price must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Computes `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::DivisionByZero`] if `denominator` is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_amounts(numerator: Amount, denominator: Amount) -> Result<Self> {
        if denominator.is_zero() {
            return Err(LaunchpadError::DivisionByZero);
        }
        Self::new(numerator.get() as f64 / denominator.get() as f64)
    }

    /// Computes the reciprocal price (`1 / self`).
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::DivisionByZero`] if the price is zero.
    pub fn inverse(&self) -> Result<Self> {
        if self.0 == 0.0 {
            return Err(LaunchpadError::DivisionByZero);
        }
        Self::new(1.0 / self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_and_nan() {
        assert!(Price::new(-1.0).is_err());
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(f64::INFINITY).is_err());
    }

    #[test]
    fn from_amounts_zero_denominator() {
        assert_eq!(
            Price::from_amounts(Amount::new(1), Amount::ZERO),
            Err(LaunchpadError::DivisionByZero)
        );
    }

    #[test]
    fn inverse() {
        let Ok(p) = Price::new(4.0) else {
            panic!("valid");
        };
        let Ok(inv) = p.inverse() else {
            panic!("non-zero");
        };
        assert!((inv.get() - 0.25).abs() < f64::EPSILON);
        assert!(Price::ZERO.inverse().is_err());
    }
}
