//! Property-based tests for the settlement rules.
//!
//! 1. **Invariant non-decrease**: a successful swap never lowers the
//!    reserve product.
//! 2. **Conservation**: supply changes by exactly the liquidity minted or
//!    burned and always equals the sum of holder balances.
//! 3. **Rounding direction**: mint never issues more than either pro-rata
//!    share and burn never pays more than the pro-rata balance.
//! 4. **Square root floor**: `isqrt(y)² ≤ y < (isqrt(y) + 1)²`.
//! 5. **Atomicity**: a swap whose output transfer is refused leaves the
//!    ledgers unchanged.

#![allow(clippy::panic)]

use num_bigint::BigInt;
use proptest::prelude::*;

use crate::config::RouterPolicy;
use crate::domain::Amount;
use crate::error::AmmError;
use crate::math::{isqrt, quote};
use crate::sandbox::fixtures::{self, ALICE, BOB, POOL, ROUTER, TOKEN_A, TOKEN_B};
use crate::sandbox::Sandbox;
use crate::traits::FungibleAsset;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Reserves in [10_000, 10_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Swap inputs as a fraction (per mille) of the input reserve.
fn input_fraction_strategy() -> impl Strategy<Value = u128> {
    1u128..=500u128
}

fn seeded(r0: u128, r1: u128) -> Sandbox {
    let mut sandbox = fixtures::sandbox(RouterPolicy::RouterOnly);
    fixtures::deposit(&mut sandbox, TOKEN_A, ALICE, r0);
    fixtures::deposit(&mut sandbox, TOKEN_B, ALICE, r1);
    let Ok(_) = sandbox.mint(&ROUTER, &ALICE) else {
        panic!("seed deposit should mint");
    };
    sandbox
}

// ---------------------------------------------------------------------------
// Property 1: Invariant non-decrease
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_never_lowers_product(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        fraction in input_fraction_strategy(),
        zero_for_one in any::<bool>(),
    ) {
        let mut sandbox = seeded(r0, r1);
        let before = sandbox.engine().get_reserves().clone();
        let (reserve_in, reserve_out) = if zero_for_one { (r0, r1) } else { (r1, r0) };
        let amount_in = (reserve_in * fraction / 1_000).max(1);

        let Ok(out) = quote::amount_out(
            &Amount::new(amount_in),
            &Amount::new(reserve_in),
            &Amount::new(reserve_out),
        ) else {
            return Ok(());
        };
        if out.is_zero() { return Ok(()); }

        let (asset_in, amount0_out, amount1_out) = if zero_for_one {
            (TOKEN_A, Amount::zero(), out)
        } else {
            (TOKEN_B, out, Amount::zero())
        };
        fixtures::deposit(&mut sandbox, asset_in, BOB, amount_in);
        let result = sandbox.swap(&ROUTER, &amount0_out, &amount1_out, &BOB);
        prop_assert!(result.is_ok(), "quoted swap rejected: {:?}", result);

        let after = sandbox.engine().get_reserves();
        prop_assert!(after.product() >= before.product());
    }

    #[test]
    fn prop_overasking_by_one_breaks_k(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        fraction in input_fraction_strategy(),
    ) {
        let mut sandbox = seeded(r0, r1);
        let amount_in = (r0 * fraction / 1_000).max(1);
        let Ok(out) = quote::amount_out(&Amount::new(amount_in), &Amount::new(r0), &Amount::new(r1)) else {
            return Ok(());
        };
        let greedy = &out + &Amount::new(1);
        if greedy >= Amount::new(r1) { return Ok(()); }
        fixtures::deposit(&mut sandbox, TOKEN_A, BOB, amount_in);
        prop_assert_eq!(
            sandbox.swap(&ROUTER, &Amount::zero(), &greedy, &BOB),
            Err(AmmError::InvariantViolation)
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2 + 3: Conservation and rounding direction
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_mint_conserves_and_rounds_down(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        d0 in 1u128..=1_000_000u128,
        d1 in 1u128..=1_000_000u128,
    ) {
        let mut sandbox = seeded(r0, r1);
        let supply_before = sandbox.engine().total_supply().clone();
        fixtures::deposit(&mut sandbox, TOKEN_A, BOB, d0);
        fixtures::deposit(&mut sandbox, TOKEN_B, BOB, d1);

        match sandbox.mint(&ROUTER, &BOB) {
            Ok(liquidity) => {
                let supply_after = sandbox.engine().total_supply();
                prop_assert_eq!(supply_after, &(&supply_before + &liquidity));
                prop_assert_eq!(&sandbox.liquidity().circulating(), supply_after);
                // liquidity · reserve ≤ deposit · supply on both sides
                prop_assert!(&liquidity * &Amount::new(r0) <= &Amount::new(d0) * &supply_before);
                prop_assert!(&liquidity * &Amount::new(r1) <= &Amount::new(d1) * &supply_before);
            }
            Err(err) => {
                prop_assert_eq!(err, AmmError::InsufficientLiquidityMinted);
            }
        }
    }

    #[test]
    fn prop_burn_conserves_and_rounds_down(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        per_mille in 1u128..=1_000u128,
    ) {
        let mut sandbox = seeded(r0, r1);
        let held = sandbox.liquidity().balance_of(&ALICE);
        let Some(held_u128) = held.to_u128() else {
            panic!("seed liquidity fits in u128");
        };
        let burned = Amount::new((held_u128 * per_mille / 1_000).max(1));
        let Ok(()) = sandbox.transfer_liquidity(&ALICE, &POOL, &burned) else {
            panic!("alice holds the liquidity");
        };
        let supply_before = sandbox.engine().total_supply().clone();

        match sandbox.burn(&ROUTER, &BOB) {
            Ok((amount0, amount1)) => {
                let supply_after = sandbox.engine().total_supply();
                prop_assert_eq!(&(supply_after + &burned), &supply_before);
                prop_assert_eq!(&sandbox.liquidity().circulating(), supply_after);
                prop_assert!(&amount0 * &supply_before <= &burned * &Amount::new(r0));
                prop_assert!(&amount1 * &supply_before <= &burned * &Amount::new(r1));
            }
            Err(err) => {
                prop_assert_eq!(err, AmmError::InsufficientLiquidityBurned);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Square root floor
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_isqrt_is_floor(y in any::<u128>()) {
        let y = BigInt::from(y);
        let Ok(root) = isqrt(&y) else {
            panic!("non-negative input");
        };
        let next = &root + 1;
        prop_assert!(&root * &root <= y);
        prop_assert!(&next * &next > y);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Atomicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_refused_swap_is_atomic(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        fraction in input_fraction_strategy(),
    ) {
        let mut sandbox = seeded(r0, r1);
        let amount_in = (r0 * fraction / 1_000).max(1);
        let Ok(out) = quote::amount_out(&Amount::new(amount_in), &Amount::new(r0), &Amount::new(r1)) else {
            return Ok(());
        };
        if out.is_zero() { return Ok(()); }
        fixtures::deposit(&mut sandbox, TOKEN_A, BOB, amount_in);
        let state_before = sandbox.engine().state().clone();
        let events_before = sandbox.events().events().len();
        let Ok(token) = sandbox.token_mut(&TOKEN_B) else {
            panic!("asset1 is wired");
        };
        token.set_failing(true);

        prop_assert!(sandbox.swap(&ROUTER, &Amount::zero(), &out, &BOB).is_err());
        prop_assert_eq!(sandbox.engine().state(), &state_before);
        prop_assert_eq!(sandbox.events().events().len(), events_before);
    }
}
