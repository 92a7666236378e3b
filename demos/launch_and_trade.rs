//! Launch a token and trade against its pool.
//!
//! Demonstrates the atomic launch (issue + seed pool), quoting, swaps in
//! both directions, a deposit at the pool ratio, and a swap rolled back
//! because the payout was refused.  Events are logged through `tracing`.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=info cargo run --example launch_and_trade
//! ```

use launchpad_amm::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Token launch and trading ===\n");

    // ── 1. Accounts and wallets ─────────────────────────────────────────
    let operator = AccountId::from_bytes([1u8; 32]);
    let custody = AccountId::from_bytes([2u8; 32]);
    let creator = AccountId::from_bytes([3u8; 32]);
    let trader = AccountId::from_bytes([4u8; 32]);

    let mut bank = MemoryBank::new(custody);
    bank.deposit(Asset::Reserve, creator, Amount::new(50_000))?;
    bank.deposit(Asset::Reserve, trader, Amount::new(20_000))?;

    // ── 2. Engine with the default 0.5% fee ─────────────────────────────
    let config = EngineConfig::with_accounts(operator, custody)?;
    let mut pad = Launchpad::new(config, bank, TracingSink, SystemClock)?;
    println!("Fee rate: {}", pad.fee_rate());

    // ── 3. Launch: 80% of supply seeds the pool ─────────────────────────
    let issue = IssueRequest::new("Stadium Token", "STAD", "ipfs://stadium", Amount::new(1_000_000))?;
    let request = LaunchRequest::new(issue, creator, Amount::new(10_000), BasisPoints::new(8_000))?;
    let launched = pad.launch(request)?;
    let token = launched.token_address();

    println!("Launched token #{} at {}", launched.token_id(), token);
    println!("  Pool:           {}", launched.pool_info());
    println!("  Creator keeps:  {}", launched.owner_tokens());
    println!("  Spot price:     {}\n", pad.spot_price(&token)?);

    // ── 4. Quote, then buy ──────────────────────────────────────────────
    let quoted = pad.token_amount_for_reserve(token, Amount::new(1_000))?;
    println!("1 000 reserve buys {quoted} tokens");

    let bought = pad.swap_reserve_for_token(trader, token, Amount::new(1_000))?;
    println!(
        "Bought {} tokens (fee {}), tx {}",
        bought.output_amount(),
        bought.fee(),
        bought.tx_ref()
    );
    println!("  Pool now:       {}\n", pad.get_pool_info(&token));

    // ── 5. Sell half back ───────────────────────────────────────────────
    let half = Amount::new(bought.output_amount().get() / 2);
    let sold = pad.swap_token_for_reserve(trader, token, half)?;
    println!("Sold {half} tokens for {} reserve", sold.output_amount());

    // ── 6. Creator deposits at the pool ratio ───────────────────────────
    let pool = pad.get_pool_info(&token);
    let reserve_in = Amount::new(1_000);
    let tokens_in = Amount::new(
        pool.token_reserves().get() * reserve_in.get() / pool.reserve_reserves().get(),
    );
    let grown = pad.add_liquidity(creator, token, tokens_in, reserve_in)?;
    println!("Added {tokens_in} tokens + {reserve_in} reserve, pool now {grown}\n");

    // ── 7. A refused payout rolls the whole swap back ───────────────────
    pad.bank_mut().refuse_payouts(Asset::Token(token), trader);
    let before = pad.get_pool_info(&token);
    match pad.swap_reserve_for_token(trader, token, Amount::new(500)) {
        Ok(_) => println!("Unexpected success"),
        Err(err) => println!("Swap rejected: {err}"),
    }
    assert_eq!(pad.get_pool_info(&token), before);
    println!(
        "Pool unchanged at {}, trader still holds {} reserve",
        before,
        pad.bank().balance_of(Asset::Reserve, &trader)
    );

    println!("\nTokens issued: {}", pad.get_total_tokens());
    Ok(())
}
