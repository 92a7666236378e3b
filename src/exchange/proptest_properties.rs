//! Property-based tests using `proptest` for exchange invariants.
//!
//! 1. **Pool seeding**: `create_pool` leaves exactly the supplied reserves.
//! 2. **Invariant growth**: `token_reserves × reserve_reserves` never
//!    decreases across swaps, and strictly grows with a non-zero fee.
//! 3. **Round-trip loss**: buying then selling the proceeds returns at most
//!    the original input.
//! 4. **Quote purity**: quoting twice gives the same answer and leaves the
//!    pool unchanged.
//! 5. **Output monotonicity**: a larger input never yields a smaller output.

use proptest::prelude::*;

use crate::bank::MemoryBank;
use crate::config::EngineConfig;
use crate::domain::{AccountId, Amount, Asset, BasisPoints, FeeRate, PoolInfo, SwapDirection, TokenAddress};
use crate::events::EventLog;
use crate::launch::Launchpad;
use crate::traits::ManualClock;

type TestPad = Launchpad<MemoryBank, EventLog, ManualClock>;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const WALLET: u128 = 1_000_000_000_000_000;

fn operator() -> AccountId {
    AccountId::from_bytes([0x0f; 32])
}

fn custody() -> AccountId {
    AccountId::from_bytes([0xcc; 32])
}

fn trader() -> AccountId {
    AccountId::from_bytes([0x22; 32])
}

fn token() -> TokenAddress {
    TokenAddress::from_bytes([0x7e; 32])
}

fn make_pad(fee_bps: u32, tokens: u128, reserve: u128) -> TestPad {
    let Ok(config) = EngineConfig::new(
        FeeRate::new(BasisPoints::new(fee_bps)),
        BasisPoints::new(100),
        operator(),
        custody(),
    ) else {
        panic!("valid config");
    };
    let mut bank = MemoryBank::new(custody());
    for asset in [Asset::Reserve, Asset::Token(token())] {
        let Ok(_) = bank.deposit(asset, trader(), Amount::new(WALLET)) else {
            panic!("deposit");
        };
    }
    let Ok(mut pad) = Launchpad::new(config, bank, EventLog::new(), ManualClock::new(0)) else {
        panic!("valid engine");
    };
    let Ok(_) = pad.create_pool(trader(), token(), Amount::new(tokens), Amount::new(reserve)) else {
        panic!("valid pool");
    };
    pad
}

fn product(info: PoolInfo) -> u128 {
    let Some(k) = info.product() else {
        panic!("product fits in u128 for the tested ranges");
    };
    k
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [10_000, 10_000_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000_000u128
}

/// Fee rates from zero to 10%.
fn fee_strategy() -> impl Strategy<Value = u32> {
    0u32..=1_000u32
}

fn direction_strategy() -> impl Strategy<Value = SwapDirection> {
    prop_oneof![
        Just(SwapDirection::ReserveToToken),
        Just(SwapDirection::TokenToReserve),
    ]
}

// ---------------------------------------------------------------------------
// Property 1: Pool seeding
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_create_pool_keeps_supplied_reserves(
        tokens in reserve_strategy(),
        reserve in reserve_strategy(),
    ) {
        let pad = make_pad(50, tokens, reserve);
        prop_assert_eq!(
            pad.get_pool_info(&token()),
            PoolInfo::new(Amount::new(tokens), Amount::new(reserve))
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: Invariant growth
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_product_never_decreases(
        tokens in reserve_strategy(),
        reserve in reserve_strategy(),
        fee in fee_strategy(),
        swaps in prop::collection::vec((direction_strategy(), 1u128..=1_000_000u128), 1..8),
    ) {
        let mut pad = make_pad(fee, tokens, reserve);
        let mut k = product(pad.get_pool_info(&token()));
        for (direction, amount_in) in swaps {
            if pad.swap(trader(), token(), Amount::new(amount_in), direction).is_err() {
                continue;
            }
            let next = product(pad.get_pool_info(&token()));
            if fee > 0 {
                prop_assert!(next > k, "k must grow with a fee: {} -> {}", k, next);
            } else {
                prop_assert!(next >= k, "k must not shrink: {} -> {}", k, next);
            }
            k = next;
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Round-trip loss
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_never_creates_value(
        tokens in reserve_strategy(),
        reserve in reserve_strategy(),
        fee in fee_strategy(),
    ) {
        let swap_in = (reserve / 1_000).max(1);
        let mut pad = make_pad(fee, tokens, reserve);

        let Ok(bought) = pad.swap(
            trader(),
            token(),
            Amount::new(swap_in),
            SwapDirection::ReserveToToken,
        ) else {
            return Ok(());
        };
        let Ok(sold) = pad.swap(
            trader(),
            token(),
            bought.output_amount(),
            SwapDirection::TokenToReserve,
        ) else {
            return Ok(());
        };

        prop_assert!(
            sold.output_amount().get() <= swap_in,
            "round-trip should lose value: final={} > original={}",
            sold.output_amount(), swap_in
        );
    }
}

// ---------------------------------------------------------------------------
// Property 4: Quote purity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_quote_is_pure(
        tokens in reserve_strategy(),
        reserve in reserve_strategy(),
        direction in direction_strategy(),
        amount_in in 1u128..=10_000_000u128,
    ) {
        let pad = make_pad(50, tokens, reserve);
        let before = pad.get_pool_info(&token());
        let first = pad.quote(token(), Amount::new(amount_in), direction);
        let second = pad.quote(token(), Amount::new(amount_in), direction);
        prop_assert_eq!(first, second);
        prop_assert_eq!(pad.get_pool_info(&token()), before);
        prop_assert!(pad.sink().events().len() == 1);
    }

    #[test]
    fn prop_quote_matches_swap(
        tokens in reserve_strategy(),
        reserve in reserve_strategy(),
        direction in direction_strategy(),
        amount_in in 1u128..=10_000_000u128,
    ) {
        let mut pad = make_pad(50, tokens, reserve);
        let Ok(quoted) = pad.quote_output(token(), Amount::new(amount_in), direction) else {
            return Ok(());
        };
        let Ok(receipt) = pad.swap(trader(), token(), Amount::new(amount_in), direction) else {
            panic!("a quotable swap must execute");
        };
        prop_assert_eq!(receipt.output_amount(), quoted);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Output monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_output_monotonic_in_input(
        tokens in reserve_strategy(),
        reserve in reserve_strategy(),
        direction in direction_strategy(),
        small in 1u128..=1_000_000u128,
        extra in 1u128..=1_000_000u128,
    ) {
        let pad = make_pad(50, tokens, reserve);
        let Ok(low) = pad.quote_output(token(), Amount::new(small), direction) else {
            return Ok(());
        };
        let Ok(high) = pad.quote_output(token(), Amount::new(small + extra), direction) else {
            return Ok(());
        };
        prop_assert!(high >= low, "output fell from {} to {}", low, high);
    }
}
