//! Liquidity removal.
//!
//! The holder first transfers liquidity tokens to the pool; `burn` destroys
//! everything the pool holds of its own token and pays out the pro-rata
//! share of both balances, rounded down.

use crate::config::PairConfig;
use crate::domain::{Address, Amount, PoolEvent, Rounding};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::state::PoolState;

use super::collaborators::transfer_out;
use super::{Collaborators, PoolEngine};

impl PoolEngine {
    /// Burns the liquidity held by the pool and sends the underlying
    /// assets to `to`.  Returns `(amount0, amount1)`.
    ///
    /// Emits `Synced` then `Burned`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Unauthorized`] if the router gate rejects `caller`.
    /// - [`AmmError::InsufficientLiquidityBurned`] if the supply is zero or
    ///   either payout rounds to zero.
    /// - [`AmmError::TransferFailed`] if the burn or a payout is refused.
    pub fn burn(
        &mut self,
        env: &mut Collaborators<'_>,
        caller: &Address,
        to: &Address,
    ) -> Result<(Amount, Amount), AmmError> {
        tracing::debug!(%caller, %to, "burn");
        self.settle("burn", env, caller, |config, state, env, pending| {
            redeem(config, state, env, caller, to, pending)
        })
    }
}

fn redeem(
    config: &PairConfig,
    state: &mut PoolState,
    env: &mut Collaborators<'_>,
    caller: &Address,
    to: &Address,
    pending: &mut Vec<PoolEvent>,
) -> Result<(Amount, Amount), AmmError> {
    let pool = config.pool();
    let reserves = state.reserves.reserves().clone();
    let (balance0, balance1) = env.balances_of(&pool);
    let liquidity = env.liquidity.balance_of(&pool);

    let fee_on = state.fee.mint_fee(
        config.fee_to(),
        &reserves,
        &mut state.supply,
        &mut *env.liquidity,
    )?;

    let total_supply = state.supply.total_supply().clone();
    if total_supply.is_zero() {
        return Err(AmmError::InsufficientLiquidityBurned);
    }
    let amount0 = liquidity.mul_div(&balance0, &total_supply, Rounding::Down)?;
    let amount1 = liquidity.mul_div(&balance1, &total_supply, Rounding::Down)?;
    if amount0.is_zero() || amount1.is_zero() {
        return Err(AmmError::InsufficientLiquidityBurned);
    }

    state.supply.burn(&mut *env.liquidity, &pool, &liquidity)?;
    transfer_out(&mut *env.asset0, &pool, to, &amount0, "asset0 payout")?;
    transfer_out(&mut *env.asset1, &pool, to, &amount1, "asset1 payout")?;
    tracing::debug!(%liquidity, %amount0, %amount1, "liquidity redeemed");

    let (balance0, balance1) = env.balances_of(&pool);
    pending.push(
        state
            .reserves
            .commit(balance0, balance1, env.clock.current_time()),
    );
    if fee_on {
        state.fee.record(state.reserves.reserves());
    }
    pending.push(PoolEvent::Burned {
        sender: *caller,
        amount0: amount0.clone(),
        amount1: amount1.clone(),
        to: *to,
    });
    Ok((amount0, amount1))
}
