//! Shared test fixtures: fixed identities and pre-wired sandboxes.

#![allow(clippy::panic)]

use crate::config::{PairConfig, RouterPolicy};
use crate::domain::{Address, Amount, AssetPair, Reserves};
use crate::state::PoolState;

use super::Sandbox;

pub(crate) const TOKEN_A: Address = Address::from_bytes([0x0a; 20]);
pub(crate) const TOKEN_B: Address = Address::from_bytes([0x0b; 20]);
pub(crate) const POOL: Address = Address::from_bytes([0x50; 20]);
pub(crate) const ROUTER: Address = Address::from_bytes([0x70; 20]);
pub(crate) const FEE_TO: Address = Address::from_bytes([0xfe; 20]);
pub(crate) const ALICE: Address = Address::from_bytes([0xa1; 20]);
pub(crate) const BOB: Address = Address::from_bytes([0xb0; 20]);

/// Starting balance of both assets for Alice and Bob.
pub(crate) const FUNDING: u128 = 1_000_000_000_000;

pub(crate) fn config(policy: RouterPolicy) -> PairConfig {
    let Ok(assets) = AssetPair::new(TOKEN_A, TOKEN_B) else {
        panic!("valid asset pair");
    };
    let Ok(cfg) = PairConfig::new(assets, POOL, policy) else {
        panic!("valid config");
    };
    cfg
}

fn fund(sandbox: &mut Sandbox) {
    sandbox.allow_router(ROUTER);
    for holder in [ALICE, BOB] {
        for asset in [TOKEN_A, TOKEN_B] {
            let Ok(()) = sandbox.faucet(&asset, &holder, &Amount::new(FUNDING)) else {
                panic!("known asset");
            };
        }
    }
}

/// Empty pair; `ROUTER` allowed; Alice and Bob funded.
pub(crate) fn sandbox(policy: RouterPolicy) -> Sandbox {
    let Ok(mut sandbox) = Sandbox::new(config(policy)) else {
        panic!("valid sandbox");
    };
    fund(&mut sandbox);
    sandbox
}

/// Pair bootstrapped by Alice depositing `(amount0, amount1)`.
pub(crate) fn bootstrapped(amount0: u128, amount1: u128) -> Sandbox {
    let mut sandbox = sandbox(RouterPolicy::RouterOnly);
    deposit(&mut sandbox, TOKEN_A, ALICE, amount0);
    deposit(&mut sandbox, TOKEN_B, ALICE, amount1);
    let Ok(_) = sandbox.mint(&ROUTER, &ALICE) else {
        panic!("bootstrap deposit should mint");
    };
    sandbox
}

/// Pair restored at reserves `(reserve0, reserve1)` with supply √K.
pub(crate) fn restored(reserve0: u128, reserve1: u128) -> Sandbox {
    let reserves = Reserves::new(Amount::new(reserve0), Amount::new(reserve1), 0);
    let supply = crate::math::isqrt_amount(&reserves.product());
    let state = PoolState::from_parts(reserves, supply, Amount::zero());
    let Ok(mut sandbox) = Sandbox::from_state(config(RouterPolicy::RouterOnly), state) else {
        panic!("valid sandbox");
    };
    fund(&mut sandbox);
    sandbox
}

pub(crate) fn deposit(sandbox: &mut Sandbox, asset: Address, from: Address, amount: u128) {
    let Ok(()) = sandbox.deposit(&asset, &from, &Amount::new(amount)) else {
        panic!("funded deposit");
    };
}
