//! Arithmetic utilities for pool calculations.
//!
//! [`CheckedArithmetic`] gives overflow-safe `Result` arithmetic on
//! [`Amount`](crate::domain::Amount); [`mul_div`] and [`compare_ratios`]
//! carry products of two `u128` values in 256/512-bit intermediates so
//! curve and ratio math never truncates before the final division.
//! [`quote_exact_in`] and [`check_deposit_ratio`] build the
//! constant-product pricing and deposit rules on top of them.

mod checked;
mod constant_product;
mod wide;

pub use checked::CheckedArithmetic;
pub use constant_product::{check_deposit_ratio, quote_exact_in};
pub use wide::{compare_ratios, mul_div, RatioCheck};
