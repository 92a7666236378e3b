//! Wide-intermediate integer helpers.
//!
//! Reserve and amount values are `u128`; their products need up to 256
//! bits.  [`mul_div`] forms `a * b` in a [`U256`] before dividing, and
//! [`compare_ratios`] cross-multiplies two fractions in a [`U512`] so the
//! tolerance scaling cannot overflow either.
//!
//! # Examples
//!
//! ```
//! use launchpad_amm::domain::Rounding;
//! use launchpad_amm::math::mul_div;
//!
//! // 1000 * 100_000 / 11_000 = 9090.90..
//! assert_eq!(mul_div(1_000, 100_000, 11_000, Rounding::Down).ok(), Some(9_090));
//! assert_eq!(mul_div(1_000, 100_000, 11_000, Rounding::Up).ok(), Some(9_091));
//! // intermediate product exceeds u128 but the quotient fits
//! assert_eq!(mul_div(u128::MAX, 4, 8, Rounding::Down).ok(), Some(u128::MAX / 2));
//! ```

use bnum::types::{U256, U512};

use crate::domain::{BasisPoints, Rounding, BPS_DENOMINATOR};
use crate::error::{LaunchpadError, Result};

/// Computes `a * b / denominator` with a 256-bit intermediate product.
///
/// # Errors
///
/// - [`LaunchpadError::DivisionByZero`] if `denominator` is zero.
/// - [`LaunchpadError::Overflow`] if the quotient does not fit in `u128`.
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Result<u128> {
    if denominator == 0 {
        return Err(LaunchpadError::DivisionByZero);
    }
    // (2^128 - 1)^2 < 2^256: the product cannot overflow
    let product = U256::from(a) * U256::from(b);
    let d = U256::from(denominator);
    let mut quotient = product / d;
    if rounding.bumps(product % d != U256::ZERO) {
        quotient += U256::ONE;
    }
    narrow(&quotient).ok_or(LaunchpadError::Overflow("mul_div quotient exceeds u128"))
}

fn narrow(value: &U256) -> Option<u128> {
    let digits = value.digits();
    if digits[2] != 0 || digits[3] != 0 {
        return None;
    }
    Some(u128::from(digits[0]) | (u128::from(digits[1]) << 64))
}

/// Position of one ratio relative to another, up to a tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatioCheck {
    /// Within tolerance of the reference ratio.
    Within,
    /// Smaller than the reference ratio by more than the tolerance.
    Below,
    /// Larger than the reference ratio by more than the tolerance.
    Above,
}

/// Compares `num / den` against the reference `ref_num / ref_den`.
///
/// The deviation is measured relative to the reference:
/// `|num·ref_den − ref_num·den| ≤ ref_num·den · tolerance / 10 000`.
/// A zero tolerance demands an exact match.
#[must_use]
pub fn compare_ratios(
    num: u128,
    den: u128,
    ref_num: u128,
    ref_den: u128,
    tolerance: BasisPoints,
) -> RatioCheck {
    let lhs = U512::from(num) * U512::from(ref_den);
    let rhs = U512::from(ref_num) * U512::from(den);
    let (diff, below) = if lhs < rhs {
        (rhs - lhs, true)
    } else {
        (lhs - rhs, false)
    };
    // both sides are < 2^256 before scaling by at most 2^32
    let allowed = rhs * U512::from(tolerance.get());
    if diff * U512::from(BPS_DENOMINATOR) <= allowed {
        RatioCheck::Within
    } else if below {
        RatioCheck::Below
    } else {
        RatioCheck::Above
    }
}
