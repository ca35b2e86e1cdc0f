//! The pair engine: configuration, persisted state and the settlement
//! frame shared by mint, burn and swap.

use crate::config::PairConfig;
use crate::domain::{Address, Amount, PoolEvent, Reserves, TokenMetadata};
use crate::error::AmmError;
use crate::state::PoolState;
use crate::traits::FromConfig;

use super::Collaborators;

/// Settlement core of one constant-product pair.
///
/// Created from a [`PairConfig`] via [`FromConfig`] (empty pair) or
/// restored with [`from_state`](PoolEngine::from_state).  Every operation
/// works on a copy of [`PoolState`] and stores it back only after all of
/// its checks passed, so a rejected call leaves the engine untouched and
/// emits no events.  Rolling back collaborator side effects (transfers,
/// mints) is the host's job.
///
/// # Example
///
/// ```rust
/// use swap_pair::config::{PairConfig, RouterPolicy};
/// use swap_pair::domain::{Address, AssetPair};
/// use swap_pair::pool::PoolEngine;
/// use swap_pair::traits::FromConfig;
///
/// let assets = AssetPair::new(Address::from_bytes([1; 20]), Address::from_bytes([2; 20]))
///     .expect("distinct assets");
/// let cfg = PairConfig::new(assets, Address::from_bytes([9; 20]), RouterPolicy::Open)
///     .expect("valid config");
/// let engine = PoolEngine::from_config(&cfg).expect("engine created");
/// assert!(engine.get_reserves().is_empty());
/// assert!(engine.total_supply().is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolEngine {
    config: PairConfig,
    state: PoolState,
}

impl FromConfig<PairConfig> for PoolEngine {
    /// # Errors
    ///
    /// Propagates any error from [`PairConfig::validate`].
    fn from_config(config: &PairConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
            state: PoolState::new(),
        })
    }
}

impl PoolEngine {
    /// Restores an engine from persisted state.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PairConfig::validate`].
    pub fn from_state(config: PairConfig, state: PoolState) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self { config, state })
    }

    /// Current reserves and the time of their last commit.
    #[must_use]
    pub const fn get_reserves(&self) -> &Reserves {
        self.state.reserves.reserves()
    }

    #[must_use]
    pub const fn token0(&self) -> Address {
        self.config.assets().asset0()
    }

    #[must_use]
    pub const fn token1(&self) -> Address {
        self.config.assets().asset1()
    }

    #[must_use]
    pub const fn total_supply(&self) -> &Amount {
        self.state.supply.total_supply()
    }

    #[must_use]
    pub const fn k_last(&self) -> &Amount {
        self.state.fee.k_last()
    }

    /// Name, symbol and decimals of the liquidity token.
    #[must_use]
    pub const fn metadata(&self) -> &TokenMetadata {
        self.config.metadata()
    }

    #[must_use]
    pub const fn config(&self) -> &PairConfig {
        &self.config
    }

    /// Persistable snapshot of the ledgers.
    #[must_use]
    pub const fn state(&self) -> &PoolState {
        &self.state
    }

    /// Turns the protocol fee skim on (`Some`) or off (`None`).
    ///
    /// Takes effect on the next mint or burn.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] for the zero address.
    pub fn set_fee_to(&mut self, fee_to: Option<Address>) -> Result<(), AmmError> {
        self.config = self.config.clone().with_fee_to(fee_to)?;
        tracing::info!(fee_to = ?fee_to, "protocol fee recipient updated");
        Ok(())
    }

    /// Wiring and router checks performed before any state is read.
    fn admit(&self, env: &Collaborators<'_>, caller: &Address) -> Result<(), AmmError> {
        env.check_wiring(&self.config)?;
        if self.config.router_policy().is_gated() && !env.authorization.is_authorized_router(caller)
        {
            return Err(AmmError::Unauthorized("caller is not an authorized router"));
        }
        Ok(())
    }

    /// Runs `body` against a working copy of the state.
    ///
    /// On success the copy replaces the engine state and the pending events
    /// are delivered in order.  On failure both are dropped.
    pub(super) fn settle<T, F>(
        &mut self,
        operation: &'static str,
        env: &mut Collaborators<'_>,
        caller: &Address,
        body: F,
    ) -> Result<T, AmmError>
    where
        F: FnOnce(
            &PairConfig,
            &mut PoolState,
            &mut Collaborators<'_>,
            &mut Vec<PoolEvent>,
        ) -> Result<T, AmmError>,
    {
        let mut working = self.state.clone();
        let mut pending = Vec::new();
        let outcome = self
            .admit(env, caller)
            .and_then(|()| body(&self.config, &mut working, env, &mut pending));

        match outcome {
            Ok(value) => {
                self.state = working;
                let reserves = self.get_reserves();
                tracing::info!(
                    operation,
                    %caller,
                    reserve0 = %reserves.reserve0(),
                    reserve1 = %reserves.reserve1(),
                    total_supply = %self.total_supply(),
                    "settled"
                );
                for event in pending {
                    env.events.emit(event);
                }
                Ok(value)
            }
            Err(err) => {
                tracing::warn!(operation, %caller, code = err.code(), "rejected: {err}");
                Err(err)
            }
        }
    }
}
