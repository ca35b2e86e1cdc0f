//! Walks one pair through bootstrap, trading, protocol fees and removal,
//! logging every settled operation.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example pair_lifecycle
//! ```

use swap_pair::config::{PairConfig, RouterPolicy};
use swap_pair::domain::{Address, Amount, AssetPair};
use swap_pair::error::AmmError;
use swap_pair::math::quote;
use swap_pair::sandbox::Sandbox;
use swap_pair::traits::FungibleAsset;

const USDC: Address = Address::from_bytes([0x01; 20]);
const WETH: Address = Address::from_bytes([0x02; 20]);
const PAIR: Address = Address::from_bytes([0x50; 20]);
const ROUTER: Address = Address::from_bytes([0x70; 20]);
const TREASURY: Address = Address::from_bytes([0xfe; 20]);
const LP: Address = Address::from_bytes([0xa1; 20]);
const TRADER: Address = Address::from_bytes([0xb0; 20]);

fn main() -> Result<(), AmmError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let config = PairConfig::new(AssetPair::new(USDC, WETH)?, PAIR, RouterPolicy::RouterOnly)?
        .with_fee_to(Some(TREASURY))?;
    let mut pair = Sandbox::new(config)?;
    pair.allow_router(ROUTER);
    for holder in [LP, TRADER] {
        pair.faucet(&USDC, &holder, &Amount::new(10_000_000_000))?;
        pair.faucet(&WETH, &holder, &Amount::new(10_000_000))?;
    }

    // 1. Bootstrap at 2 000 USDC per WETH
    pair.deposit(&USDC, &LP, &Amount::new(2_000_000_000))?;
    pair.deposit(&WETH, &LP, &Amount::new(1_000_000))?;
    let minted = pair.mint(&ROUTER, &LP)?;
    println!("LP minted {minted}; reserves {}", pair.engine().get_reserves());

    // 2. Ten round trips of trading
    for round in 0..10 {
        pair.advance_time(12);
        let reserves = pair.engine().get_reserves().clone();
        let usdc_in = Amount::new(50_000_000);
        let weth_out = quote::amount_out(&usdc_in, reserves.reserve0(), reserves.reserve1())?;
        pair.deposit(&USDC, &TRADER, &usdc_in)?;
        pair.swap(&ROUTER, &Amount::zero(), &weth_out, &TRADER)?;

        let reserves = pair.engine().get_reserves().clone();
        let usdc_out = quote::amount_out(&weth_out, reserves.reserve1(), reserves.reserve0())?;
        pair.deposit(&WETH, &TRADER, &weth_out)?;
        pair.swap(&ROUTER, &usdc_out, &Amount::zero(), &TRADER)?;
        println!("round {round}: sold {usdc_in} USDC, bought back {usdc_out}");
    }

    // 3. A greedy swap is rejected and leaves nothing behind
    let reserves = pair.engine().get_reserves().clone();
    let fair = quote::amount_out(&Amount::new(1_000_000), reserves.reserve0(), reserves.reserve1())?;
    pair.deposit(&USDC, &TRADER, &Amount::new(1_000_000))?;
    let greedy = &fair + &Amount::new(1);
    match pair.swap(&ROUTER, &Amount::zero(), &greedy, &TRADER) {
        Err(err) => println!("greedy swap rejected: {err} ({})", err.code()),
        Ok(()) => println!("greedy swap unexpectedly settled"),
    }
    pair.swap(&ROUTER, &Amount::zero(), &fair, &TRADER)?;

    // 4. LP exits; the treasury collects its share of fee growth
    let held = pair.liquidity().balance_of(&LP);
    pair.transfer_liquidity(&LP, &PAIR, &held)?;
    let (usdc, weth) = pair.burn(&ROUTER, &LP)?;
    println!("LP withdrew {usdc} USDC and {weth} WETH");
    println!(
        "treasury holds {} liquidity; supply {}; kLast {}",
        pair.liquidity().balance_of(&TREASURY),
        pair.engine().total_supply(),
        pair.engine().k_last()
    );
    println!("{} events recorded", pair.events().events().len());
    Ok(())
}
