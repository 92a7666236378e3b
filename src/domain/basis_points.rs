//! Basis-point representation for percentages.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::Result;
use crate::math::mul_div;

/// Denominator of every basis-point ratio (10 000 bp = 100%).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// All `u32` values can be constructed, but values above 10 000 are
/// nonsensical as percentages. Use [`is_valid_percent`](Self::is_valid_percent)
/// to check.
///
/// # Examples
///
/// ```
/// use launchpad_amm::domain::{Amount, BasisPoints, Rounding};
///
/// let half = BasisPoints::new(5_000);
/// assert!(half.is_valid_percent());
/// assert_eq!(half.apply(Amount::new(1_000), Rounding::Down).ok(), Some(Amount::new(500)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(BPS_DENOMINATOR);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in the valid percentage range (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= BPS_DENOMINATOR
    }

    /// Returns the complement `10_000 - self`, or `None` above 100%.
    #[must_use]
    pub const fn complement(&self) -> Option<Self> {
        match BPS_DENOMINATOR.checked_sub(self.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Converts to a floating-point percentage, e.g. 50 bp → 0.5.
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Computes `amount * self / 10_000` with explicit rounding.
    ///
    /// The product is formed in 256-bit precision, so this only fails
    /// when the result itself does not fit an [`Amount`].
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::Overflow`](crate::error::LaunchpadError::Overflow)
    /// if the result exceeds `u128`.
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> Result<Amount> {
        mul_div(
            amount.get(),
            u128::from(self.0),
            u128::from(BPS_DENOMINATOR),
            rounding,
        )
        .map(Amount::new)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(BasisPoints::ZERO.get(), 0);
        assert_eq!(BasisPoints::MAX_PERCENT.get(), 10_000);
        assert_eq!(BasisPoints::default(), BasisPoints::ZERO);
    }

    #[test]
    fn valid_percent_range() {
        assert!(BasisPoints::ZERO.is_valid_percent());
        assert!(BasisPoints::MAX_PERCENT.is_valid_percent());
        assert!(!BasisPoints::new(10_001).is_valid_percent());
    }

    #[test]
    fn complement() {
        assert_eq!(BasisPoints::new(50).complement(), Some(BasisPoints::new(9_950)));
        assert_eq!(BasisPoints::MAX_PERCENT.complement(), Some(BasisPoints::ZERO));
        assert_eq!(BasisPoints::new(10_001).complement(), None);
    }

    #[test]
    fn as_percent_fifty_bp() {
        assert!((BasisPoints::new(50).as_percent() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", BasisPoints::new(30)), "30bp");
    }

    // -- apply --------------------------------------------------------------

    #[test]
    fn apply_round_down() {
        let Ok(result) = BasisPoints::new(30).apply(Amount::new(1_000_000), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(result, Amount::new(3_000));
    }

    #[test]
    fn apply_remainder_rounding() {
        // 30bp of 1 = 0.003
        let bp = BasisPoints::new(30);
        let Ok(down) = bp.apply(Amount::new(1), Rounding::Down) else {
            panic!("expected Ok");
        };
        let Ok(up) = bp.apply(Amount::new(1), Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(down, Amount::ZERO);
        assert_eq!(up, Amount::new(1));
    }

    #[test]
    fn apply_max_amount_does_not_overflow() {
        let Ok(result) = BasisPoints::new(5_000).apply(Amount::MAX, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(result, Amount::new(u128::MAX / 2));
    }

    #[test]
    fn apply_above_hundred_percent_overflows() {
        let result = BasisPoints::new(u32::MAX).apply(Amount::MAX, Rounding::Down);
        assert!(result.is_err());
    }
}
