//! Constant-product curve (`x · y = k`) pricing.
//!
//! The fee is taken from the **output**, after the curve has been applied:
//!
//! 1. `before = floor(amount_in × reserve_out / (reserve_in + amount_in))`
//! 2. `amount_out = floor(before × (10 000 − fee_bps) / 10 000)`
//! 3. `fee = before − amount_out`
//!
//! Both divisions truncate, so every rounding step favours the pool.  The
//! fee never leaves the pool, which makes `k` strictly increase on every
//! swap with a non-zero fee.

use crate::domain::{Amount, BasisPoints, FeeRate, PoolInfo, Quote, Rounding, SwapDirection, TokenAddress};
use crate::error::{LaunchpadError, Result};
use crate::math::{compare_ratios, mul_div, CheckedArithmetic, RatioCheck};

/// Prices an exact-input swap against `pool`.
///
/// # Errors
///
/// - [`LaunchpadError::InvalidParameter`] if `amount_in` is zero or the
///   output rounds down to zero.
/// - [`LaunchpadError::PoolNotFound`] if `pool` has no reserves.
/// - [`LaunchpadError::InsufficientLiquidity`] if `amount_in` is at least
///   the whole opposing reserve.
/// - [`LaunchpadError::Overflow`] if `reserve_in + amount_in` overflows.
pub fn quote_exact_in(
    token: TokenAddress,
    pool: PoolInfo,
    direction: SwapDirection,
    amount_in: Amount,
    fee_rate: FeeRate,
) -> Result<Quote> {
    if amount_in.is_zero() {
        return Err(LaunchpadError::InvalidParameter("swap amount must be positive"));
    }
    if !pool.exists() {
        return Err(LaunchpadError::PoolNotFound(token));
    }
    let (reserve_in, reserve_out) = pool.sides(direction);
    if amount_in >= reserve_out {
        return Err(LaunchpadError::InsufficientLiquidity {
            token,
            requested: amount_in,
            available: reserve_out,
        });
    }

    let denominator = reserve_in.safe_add(&amount_in)?;
    let before = Amount::new(mul_div(
        amount_in.get(),
        reserve_out.get(),
        denominator.get(),
        Rounding::Down,
    )?);
    if before >= reserve_out {
        return Err(LaunchpadError::InsufficientLiquidity {
            token,
            requested: before,
            available: reserve_out,
        });
    }

    let kept = fee_rate
        .basis_points()
        .complement()
        .ok_or(LaunchpadError::InvalidParameter("fee rate must be below 10000 bp"))?;
    let amount_out = kept.apply(before, Rounding::Down)?;
    if amount_out.is_zero() {
        return Err(LaunchpadError::InvalidParameter("swap output rounds to zero"));
    }
    let fee = before.safe_sub(&amount_out)?;

    Ok(Quote {
        direction,
        amount_in,
        amount_before_fee: before,
        fee,
        amount_out,
    })
}

/// Checks that a deposit of `token_amount` / `reserve_amount` matches the
/// ratio of `pool` within `tolerance`.
///
/// When it does not, the short side is reported together with the amount
/// the current ratio would require on that side, rounded up.
///
/// # Errors
///
/// - [`LaunchpadError::InvalidParameter`] if either amount is zero.
/// - [`LaunchpadError::PoolNotFound`] if `pool` has no reserves.
/// - [`LaunchpadError::InsufficientAmount`] if the deposit is lopsided.
pub fn check_deposit_ratio(
    token: TokenAddress,
    pool: PoolInfo,
    token_amount: Amount,
    reserve_amount: Amount,
    tolerance: BasisPoints,
) -> Result<()> {
    if token_amount.is_zero() || reserve_amount.is_zero() {
        return Err(LaunchpadError::InvalidParameter("liquidity amounts must be positive"));
    }
    if !pool.exists() {
        return Err(LaunchpadError::PoolNotFound(token));
    }
    let token_reserves = pool.token_reserves().get();
    let reserve_reserves = pool.reserve_reserves().get();

    match compare_ratios(
        token_amount.get(),
        reserve_amount.get(),
        token_reserves,
        reserve_reserves,
        tolerance,
    ) {
        RatioCheck::Within => Ok(()),
        RatioCheck::Below => Err(LaunchpadError::InsufficientAmount {
            token,
            provided: token_amount,
            required: Amount::new(mul_div(
                reserve_amount.get(),
                token_reserves,
                reserve_reserves,
                Rounding::Up,
            )?),
        }),
        RatioCheck::Above => Err(LaunchpadError::InsufficientAmount {
            token,
            provided: reserve_amount,
            required: Amount::new(mul_div(
                token_amount.get(),
                reserve_reserves,
                token_reserves,
                Rounding::Up,
            )?),
        }),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use test_case::test_case;

    // -- helpers --------------------------------------------------------------

    fn token() -> TokenAddress {
        TokenAddress::from_bytes([7u8; 32])
    }

    fn seeded() -> PoolInfo {
        PoolInfo::new(Amount::new(100_000), Amount::new(10_000))
    }

    fn half_percent() -> FeeRate {
        FeeRate::HALF_PERCENT
    }

    // -- quote_exact_in ---------------------------------------------------------

    #[test]
    fn floor_then_fee() {
        let Ok(q) = quote_exact_in(
            token(),
            seeded(),
            SwapDirection::ReserveToToken,
            Amount::new(1_000),
            half_percent(),
        ) else {
            panic!("expected quote");
        };
        // 1000 * 100000 / 11000 = 9090.90.. -> 9090; 9090 * 9950 / 10000 = 9044.55 -> 9044
        assert_eq!(q.amount_before_fee(), Amount::new(9_090));
        assert_eq!(q.amount_out(), Amount::new(9_044));
        assert_eq!(q.fee(), Amount::new(46));
    }

    #[test]
    fn token_to_reserve_uses_opposite_sides() {
        let Ok(q) = quote_exact_in(
            token(),
            seeded(),
            SwapDirection::TokenToReserve,
            Amount::new(9_000),
            half_percent(),
        ) else {
            panic!("expected quote");
        };
        // 9000 * 10000 / 109000 = 825.68 -> 825; 825 * 0.995 = 820.87 -> 820
        assert_eq!(q.amount_before_fee(), Amount::new(825));
        assert_eq!(q.amount_out(), Amount::new(820));
    }

    #[test]
    fn zero_fee_keeps_curve_output() {
        let Ok(q) = quote_exact_in(
            token(),
            seeded(),
            SwapDirection::ReserveToToken,
            Amount::new(1_000),
            FeeRate::ZERO,
        ) else {
            panic!("expected quote");
        };
        assert_eq!(q.amount_out(), q.amount_before_fee());
        assert!(q.fee().is_zero());
    }

    #[test_case(0 => ErrorKind::InvalidParameter ; "zero input")]
    #[test_case(100_000 => ErrorKind::InsufficientLiquidity ; "input equals opposing reserve")]
    #[test_case(250_000 => ErrorKind::InsufficientLiquidity ; "input above opposing reserve")]
    fn rejected_buys(amount_in: u128) -> ErrorKind {
        let Err(e) = quote_exact_in(
            token(),
            seeded(),
            SwapDirection::ReserveToToken,
            Amount::new(amount_in),
            half_percent(),
        ) else {
            panic!("expected error");
        };
        e.kind()
    }

    #[test]
    fn sell_of_opposing_reserve_size_rejected() {
        let result = quote_exact_in(
            token(),
            seeded(),
            SwapDirection::TokenToReserve,
            Amount::new(10_000),
            half_percent(),
        );
        assert_eq!(
            result,
            Err(LaunchpadError::InsufficientLiquidity {
                token: token(),
                requested: Amount::new(10_000),
                available: Amount::new(10_000),
            })
        );
    }

    #[test]
    fn empty_pool_is_not_found() {
        let result = quote_exact_in(
            token(),
            PoolInfo::default(),
            SwapDirection::ReserveToToken,
            Amount::new(1),
            half_percent(),
        );
        assert_eq!(result, Err(LaunchpadError::PoolNotFound(token())));
    }

    #[test]
    fn dust_output_rejected() {
        // 1 * 10000 / 100001 = 0
        let result = quote_exact_in(
            token(),
            seeded(),
            SwapDirection::TokenToReserve,
            Amount::new(1),
            half_percent(),
        );
        assert!(matches!(result, Err(LaunchpadError::InvalidParameter(_))));
    }

    #[test]
    fn large_reserves_do_not_overflow() {
        let pool = PoolInfo::new(Amount::new(u128::MAX / 2), Amount::new(u128::MAX / 2));
        let Ok(q) = quote_exact_in(
            token(),
            pool,
            SwapDirection::ReserveToToken,
            Amount::new(u128::MAX / 4),
            half_percent(),
        ) else {
            panic!("expected quote");
        };
        assert!(q.amount_out() < Amount::new(u128::MAX / 4));
    }

    // -- check_deposit_ratio ----------------------------------------------------

    #[test]
    fn proportional_deposit_accepted() {
        let result = check_deposit_ratio(
            token(),
            seeded(),
            Amount::new(10_000),
            Amount::new(1_000),
            BasisPoints::ZERO,
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn deposit_within_tolerance_accepted() {
        // 0.5% short on tokens with a 1% tolerance
        let result = check_deposit_ratio(
            token(),
            seeded(),
            Amount::new(9_950),
            Amount::new(1_000),
            BasisPoints::new(100),
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn short_token_side_reports_required_tokens() {
        let result = check_deposit_ratio(
            token(),
            seeded(),
            Amount::new(5_000),
            Amount::new(1_000),
            BasisPoints::new(100),
        );
        assert_eq!(
            result,
            Err(LaunchpadError::InsufficientAmount {
                token: token(),
                provided: Amount::new(5_000),
                required: Amount::new(10_000),
            })
        );
    }

    #[test]
    fn short_reserve_side_reports_required_reserve() {
        let result = check_deposit_ratio(
            token(),
            seeded(),
            Amount::new(20_000),
            Amount::new(1_000),
            BasisPoints::new(100),
        );
        assert_eq!(
            result,
            Err(LaunchpadError::InsufficientAmount {
                token: token(),
                provided: Amount::new(1_000),
                required: Amount::new(2_000),
            })
        );
    }

    #[test]
    fn zero_deposit_rejected() {
        let result = check_deposit_ratio(
            token(),
            seeded(),
            Amount::ZERO,
            Amount::new(1_000),
            BasisPoints::new(100),
        );
        assert!(matches!(result, Err(LaunchpadError::InvalidParameter(_))));
    }
}
