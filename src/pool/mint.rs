//! Liquidity provision.
//!
//! The depositor transfers both assets to the pool first; `mint` measures
//! the deposit as `balance − reserve` and issues liquidity for it:
//!
//! ```text
//! first deposit:  liquidity = √(amount0 · amount1) − MINIMUM_LIQUIDITY
//! afterwards:     liquidity = min(amount0 · supply / reserve0,
//!                                 amount1 · supply / reserve1)   (floor)
//! ```
//!
//! The first deposit also locks `MINIMUM_LIQUIDITY` at the zero address.

use num_bigint::{BigInt, Sign};

use crate::config::PairConfig;
use crate::constants::MINIMUM_LIQUIDITY;
use crate::domain::{Address, Amount, PoolEvent};
use crate::error::AmmError;
use crate::math::isqrt;
use crate::state::PoolState;

use super::{Collaborators, PoolEngine};

impl PoolEngine {
    /// Issues liquidity for the assets deposited since the last commit and
    /// returns the amount minted to `to`.
    ///
    /// Emits `Synced` then `Minted`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Unauthorized`] if the router gate rejects `caller`.
    /// - [`AmmError::InvalidArgument`] if exactly one asset balance fell
    ///   below its reserve on a first deposit.
    /// - [`AmmError::InsufficientLiquidity`] if the pair has supply but an
    ///   empty reserve.
    /// - [`AmmError::InsufficientLiquidityMinted`] if the deposit is worth
    ///   no liquidity (including a first deposit with
    ///   `√(amount0 · amount1) ≤ MINIMUM_LIQUIDITY`).
    /// - [`AmmError::TransferFailed`] if the liquidity token refuses a mint.
    pub fn mint(
        &mut self,
        env: &mut Collaborators<'_>,
        caller: &Address,
        to: &Address,
    ) -> Result<Amount, AmmError> {
        tracing::debug!(%caller, %to, "mint");
        self.settle("mint", env, caller, |config, state, env, pending| {
            provide(config, state, env, caller, to, pending)
        })
    }
}

fn provide(
    config: &PairConfig,
    state: &mut PoolState,
    env: &mut Collaborators<'_>,
    caller: &Address,
    to: &Address,
    pending: &mut Vec<PoolEvent>,
) -> Result<Amount, AmmError> {
    let pool = config.pool();
    let reserves = state.reserves.reserves().clone();
    let (balance0, balance1) = env.balances_of(&pool);
    let amount0 = balance0.to_signed() - reserves.reserve0().to_signed();
    let amount1 = balance1.to_signed() - reserves.reserve1().to_signed();

    let fee_on = state.fee.mint_fee(
        config.fee_to(),
        &reserves,
        &mut state.supply,
        &mut *env.liquidity,
    )?;

    let total_supply = state.supply.total_supply().clone();
    let bootstrap = total_supply.is_zero();
    let liquidity = if bootstrap {
        isqrt(&(&amount0 * &amount1))? - BigInt::from(MINIMUM_LIQUIDITY)
    } else {
        if reserves.is_empty() {
            return Err(AmmError::InsufficientLiquidity);
        }
        let supply = total_supply.to_signed();
        let liquidity0 = &amount0 * &supply / reserves.reserve0().to_signed();
        let liquidity1 = &amount1 * &supply / reserves.reserve1().to_signed();
        liquidity0.min(liquidity1)
    };
    if liquidity.sign() != Sign::Plus {
        return Err(AmmError::InsufficientLiquidityMinted);
    }
    let (Some(liquidity), Some(amount0), Some(amount1)) = (
        Amount::from_signed(&liquidity),
        Amount::from_signed(&amount0),
        Amount::from_signed(&amount1),
    ) else {
        return Err(AmmError::InsufficientLiquidityMinted);
    };

    if bootstrap {
        let locked = Amount::new(MINIMUM_LIQUIDITY);
        state
            .supply
            .mint(&mut *env.liquidity, &Address::zero(), &locked)?;
    }
    state.supply.mint(&mut *env.liquidity, to, &liquidity)?;
    tracing::debug!(%amount0, %amount1, %liquidity, bootstrap, "liquidity issued");

    pending.push(
        state
            .reserves
            .commit(balance0, balance1, env.clock.current_time()),
    );
    if fee_on {
        state.fee.record(state.reserves.reserves());
    }
    pending.push(PoolEvent::Minted {
        sender: *caller,
        amount0,
        amount1,
    });
    Ok(liquidity)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::RouterPolicy;
    use crate::sandbox::fixtures::{self, ALICE, BOB, POOL, ROUTER, TOKEN_A, TOKEN_B};
    use crate::traits::FungibleAsset;

    #[test]
    fn first_deposit_locks_minimum_liquidity() {
        let mut sandbox = fixtures::sandbox(RouterPolicy::RouterOnly);
        fixtures::deposit(&mut sandbox, TOKEN_A, ALICE, 2_000);
        fixtures::deposit(&mut sandbox, TOKEN_B, ALICE, 2_000);
        let Ok(liquidity) = sandbox.mint(&ROUTER, &ALICE) else {
            panic!("expected Ok");
        };
        assert_eq!(liquidity, Amount::new(1_000));
        assert_eq!(sandbox.engine().total_supply(), &Amount::new(2_000));
        assert_eq!(sandbox.liquidity().balance_of(&ALICE), Amount::new(1_000));
        assert_eq!(
            sandbox.liquidity().balance_of(&Address::zero()),
            Amount::new(MINIMUM_LIQUIDITY)
        );
        let reserves = sandbox.engine().get_reserves();
        assert_eq!(reserves.reserve0(), &Amount::new(2_000));
        assert_eq!(reserves.reserve1(), &Amount::new(2_000));
    }

    #[test]
    fn first_deposit_emits_synced_then_minted() {
        let sandbox = fixtures::bootstrapped(2_000, 2_000);
        let names: Vec<_> = sandbox.events().events().iter().map(PoolEvent::name).collect();
        assert_eq!(names, ["Synced", "Minted"]);
        assert_eq!(
            sandbox.events().last(),
            Some(&PoolEvent::Minted {
                sender: ROUTER,
                amount0: Amount::new(2_000),
                amount1: Amount::new(2_000),
            })
        );
    }

    #[test]
    fn underfunded_first_deposit_rejected() {
        let mut sandbox = fixtures::sandbox(RouterPolicy::RouterOnly);
        fixtures::deposit(&mut sandbox, TOKEN_A, ALICE, 1_000);
        fixtures::deposit(&mut sandbox, TOKEN_B, ALICE, 1_000);
        assert_eq!(
            sandbox.mint(&ROUTER, &ALICE),
            Err(AmmError::InsufficientLiquidityMinted)
        );
        assert!(sandbox.engine().total_supply().is_zero());
        assert!(sandbox.engine().get_reserves().is_empty());
        assert!(sandbox.liquidity().circulating().is_zero());
        assert!(sandbox.events().events().is_empty());
    }

    #[test]
    fn one_sided_first_deposit_rejected() {
        let mut sandbox = fixtures::sandbox(RouterPolicy::RouterOnly);
        fixtures::deposit(&mut sandbox, TOKEN_A, ALICE, 50_000);
        assert_eq!(
            sandbox.mint(&ROUTER, &ALICE),
            Err(AmmError::InsufficientLiquidityMinted)
        );
    }

    #[test]
    fn later_deposit_uses_scarcer_side() {
        let mut sandbox = fixtures::bootstrapped(2_000, 2_000);
        fixtures::deposit(&mut sandbox, TOKEN_A, BOB, 1_000);
        fixtures::deposit(&mut sandbox, TOKEN_B, BOB, 500);
        let Ok(liquidity) = sandbox.mint(&ROUTER, &BOB) else {
            panic!("expected Ok");
        };
        // min(1000·2000/2000, 500·2000/2000)
        assert_eq!(liquidity, Amount::new(500));
        assert_eq!(sandbox.engine().total_supply(), &Amount::new(2_500));
        let reserves = sandbox.engine().get_reserves();
        assert_eq!(reserves.reserve0(), &Amount::new(3_000));
        assert_eq!(reserves.reserve1(), &Amount::new(2_500));
    }

    #[test]
    fn pro_rata_rounds_down() {
        let mut sandbox = fixtures::bootstrapped(3_000, 3_000);
        // supply 3000: 7·3000/3000 = 7 exactly, 5·3000/3000 = 5
        fixtures::deposit(&mut sandbox, TOKEN_A, BOB, 7);
        fixtures::deposit(&mut sandbox, TOKEN_B, BOB, 5);
        assert_eq!(sandbox.mint(&ROUTER, &BOB), Ok(Amount::new(5)));

        let mut sandbox = fixtures::bootstrapped(3_000, 7_000);
        // supply √21e6 = 4582: 1·4582/3000 = 1.52… → 1
        fixtures::deposit(&mut sandbox, TOKEN_A, BOB, 1);
        fixtures::deposit(&mut sandbox, TOKEN_B, BOB, 3);
        assert_eq!(sandbox.mint(&ROUTER, &BOB), Ok(Amount::new(1)));
    }

    #[test]
    fn dust_deposit_rejected() {
        let mut sandbox = fixtures::bootstrapped(3_000, 7_000);
        fixtures::deposit(&mut sandbox, TOKEN_A, BOB, 1);
        // asset1 deposit of zero makes liquidity1 zero
        assert_eq!(
            sandbox.mint(&ROUTER, &BOB),
            Err(AmmError::InsufficientLiquidityMinted)
        );
        assert_eq!(sandbox.asset0().balance_of(&POOL), Amount::new(3_001));
    }

    #[test]
    fn commit_stamps_clock_time() {
        let mut sandbox = fixtures::sandbox(RouterPolicy::RouterOnly);
        sandbox.advance_time(1_700);
        fixtures::deposit(&mut sandbox, TOKEN_A, ALICE, 2_000);
        fixtures::deposit(&mut sandbox, TOKEN_B, ALICE, 2_000);
        let Ok(_) = sandbox.mint(&ROUTER, &ALICE) else {
            panic!("expected Ok");
        };
        assert_eq!(sandbox.engine().get_reserves().block_timestamp_last(), 1_700);
    }

    #[test]
    fn refused_liquidity_mint_rolls_back() {
        let mut sandbox = fixtures::sandbox(RouterPolicy::RouterOnly);
        fixtures::deposit(&mut sandbox, TOKEN_A, ALICE, 2_000);
        fixtures::deposit(&mut sandbox, TOKEN_B, ALICE, 2_000);
        let Ok(token) = sandbox.token_mut(&POOL) else {
            panic!("expected liquidity token");
        };
        token.set_failing(true);
        let Err(AmmError::TransferFailed(_)) = sandbox.mint(&ROUTER, &ALICE) else {
            panic!("expected TransferFailed");
        };
        assert!(sandbox.engine().total_supply().is_zero());
        assert!(sandbox.engine().get_reserves().is_empty());
        assert!(sandbox.events().events().is_empty());
    }
}
