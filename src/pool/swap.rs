//! Swaps.
//!
//! The caller names the outputs; the inputs are whatever the pool received
//! on top of `reserve − amount_out` once the outputs have left.  Outputs
//! are sent before balances are read, so a router may deposit the input in
//! the same transaction.  The trade stands if the fee-adjusted invariant
//! did not shrink:
//!
//! ```text
//! (balance0·1000 − amount0_in·3) · (balance1·1000 − amount1_in·3)
//!     ≥ reserve0 · reserve1 · 1_000_000
//! ```

use crate::config::PairConfig;
use crate::constants::{FEE_SCALE, INVARIANT_SCALE, SWAP_FEE};
use crate::domain::{Address, Amount, PoolEvent};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::state::PoolState;

use super::collaborators::transfer_out;
use super::{Collaborators, PoolEngine};

impl PoolEngine {
    /// Sends `amount0_out` / `amount1_out` to `to` and settles against the
    /// input already transferred to the pool.
    ///
    /// Exactly one output must be non-zero.  Emits `Synced` then `Swapped`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Unauthorized`] if the router gate rejects `caller`.
    /// - [`AmmError::InsufficientOutputAmount`] unless exactly one output
    ///   is non-zero.
    /// - [`AmmError::InsufficientLiquidity`] if an output would drain its
    ///   reserve.
    /// - [`AmmError::InvalidDestination`] if `to` is one of the assets.
    /// - [`AmmError::TransferFailed`] if an output transfer is refused.
    /// - [`AmmError::InsufficientInputAmount`] if nothing came in.
    /// - [`AmmError::InvariantViolation`] if the fee-adjusted product fell.
    pub fn swap(
        &mut self,
        env: &mut Collaborators<'_>,
        caller: &Address,
        amount0_out: &Amount,
        amount1_out: &Amount,
        to: &Address,
    ) -> Result<(), AmmError> {
        tracing::debug!(%caller, %amount0_out, %amount1_out, %to, "swap");
        self.settle("swap", env, caller, |config, state, env, pending| {
            exchange(config, state, env, caller, amount0_out, amount1_out, to, pending)
        })
    }
}

#[allow(clippy::too_many_arguments)]
fn exchange(
    config: &PairConfig,
    state: &mut PoolState,
    env: &mut Collaborators<'_>,
    caller: &Address,
    amount0_out: &Amount,
    amount1_out: &Amount,
    to: &Address,
    pending: &mut Vec<PoolEvent>,
) -> Result<(), AmmError> {
    if amount0_out.is_zero() == amount1_out.is_zero() {
        return Err(AmmError::InsufficientOutputAmount);
    }
    let reserves = state.reserves.reserves().clone();
    if amount0_out >= reserves.reserve0() || amount1_out >= reserves.reserve1() {
        return Err(AmmError::InsufficientLiquidity);
    }
    if config.assets().contains(to) {
        return Err(AmmError::InvalidDestination);
    }

    let pool = config.pool();
    if !amount0_out.is_zero() {
        transfer_out(&mut *env.asset0, &pool, to, amount0_out, "asset0 output")?;
    }
    if !amount1_out.is_zero() {
        transfer_out(&mut *env.asset1, &pool, to, amount1_out, "asset1 output")?;
    }

    let (balance0, balance1) = env.balances_of(&pool);
    let amount0_in = implied_input(&balance0, reserves.reserve0(), amount0_out)?;
    let amount1_in = implied_input(&balance1, reserves.reserve1(), amount1_out)?;
    if amount0_in.is_zero() && amount1_in.is_zero() {
        return Err(AmmError::InsufficientInputAmount);
    }

    let adjusted0 = balance0
        .scale(FEE_SCALE)
        .safe_sub(&amount0_in.scale(SWAP_FEE))?;
    let adjusted1 = balance1
        .scale(FEE_SCALE)
        .safe_sub(&amount1_in.scale(SWAP_FEE))?;
    if &adjusted0 * &adjusted1 < reserves.product().scale(INVARIANT_SCALE) {
        return Err(AmmError::InvariantViolation);
    }
    tracing::debug!(%amount0_in, %amount1_in, "invariant holds");

    pending.push(
        state
            .reserves
            .commit(balance0, balance1, env.clock.current_time()),
    );
    pending.push(PoolEvent::Swapped {
        sender: *caller,
        amount0_in,
        amount1_in,
        amount0_out: amount0_out.clone(),
        amount1_out: amount1_out.clone(),
        to: *to,
    });
    Ok(())
}

/// `balance − (reserve − amount_out)`, or zero if the balance is not above
/// that floor.
fn implied_input(
    balance: &Amount,
    reserve: &Amount,
    amount_out: &Amount,
) -> Result<Amount, AmmError> {
    let floor = reserve.safe_sub(amount_out)?;
    Ok(balance.checked_sub(&floor).unwrap_or_default())
}
