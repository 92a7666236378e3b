//! Checked arithmetic trait for domain wrapper types.
//!
//! [`CheckedArithmetic`] turns the `Option`-returning checked operations of
//! [`Amount`] into `Result`s carrying a [`LaunchpadError`], so reserve and
//! balance updates can use `?`.
//!
//! # Examples
//!
//! ```
//! use launchpad_amm::domain::Amount;
//! use launchpad_amm::math::CheckedArithmetic;
//!
//! let a = Amount::new(100);
//! assert_eq!(a.safe_add(&Amount::new(200)).ok(), Some(Amount::new(300)));
//! assert!(a.safe_sub(&Amount::new(101)).is_err());
//! ```

use crate::domain::{Amount, Rounding};
use crate::error::LaunchpadError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_add(&self, other: &Self) -> Result<Self, LaunchpadError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::Overflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, LaunchpadError>;

    /// Checked division with explicit [`Rounding`] direction.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, LaunchpadError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, LaunchpadError> {
        self.checked_add(other)
            .ok_or(LaunchpadError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, LaunchpadError> {
        self.checked_sub(other)
            .ok_or(LaunchpadError::Overflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, LaunchpadError> {
        self.checked_div(other, rounding)
            .ok_or(LaunchpadError::DivisionByZero)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn add_ok() {
        let Ok(r) = Amount::new(100).safe_add(&Amount::new(200)) else {
            panic!("expected Ok");
        };
        assert_eq!(r, Amount::new(300));
    }

    #[test]
    fn add_overflow() {
        let Err(LaunchpadError::Overflow(_)) = Amount::MAX.safe_add(&Amount::new(1)) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn sub_underflow() {
        let Err(LaunchpadError::Overflow(msg)) = Amount::new(1).safe_sub(&Amount::new(2)) else {
            panic!("expected Overflow");
        };
        assert_eq!(msg, "amount subtraction underflow");
    }

    #[test]
    fn div_by_zero() {
        assert_eq!(
            Amount::new(5).safe_div(&Amount::ZERO, Rounding::Down),
            Err(LaunchpadError::DivisionByZero)
        );
    }

    #[test]
    fn div_rounds() {
        let Ok(r) = Amount::new(10).safe_div(&Amount::new(4), Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(r, Amount::new(3));
    }
}
