//! Transactional host around one [`PoolEngine`].

use crate::config::PairConfig;
use crate::domain::{Address, Amount};
use crate::error::AmmError;
use crate::pool::{Collaborators, PoolEngine};
use crate::state::PoolState;
use crate::traits::{FromConfig, FungibleAsset};

use super::{InMemoryToken, ManualClock, RecordingEventSink, RouterAllowList};

/// A pair plus every collaborator it needs, all in memory.
///
/// The liquidity token is identified by the pool address.  Engine calls go
/// through [`transact`](Sandbox::transact); token movements made by the
/// caller beforehand ([`deposit`](Sandbox::deposit),
/// [`transfer_liquidity`](Sandbox::transfer_liquidity)) are separate
/// transactions and stay in place when a later call fails.
///
/// # Examples
///
/// ```
/// use swap_pair::config::{PairConfig, RouterPolicy};
/// use swap_pair::domain::{Address, Amount, AssetPair};
/// use swap_pair::sandbox::Sandbox;
///
/// let a = Address::from_bytes([1; 20]);
/// let b = Address::from_bytes([2; 20]);
/// let alice = Address::from_bytes([0xa1; 20]);
/// let cfg = PairConfig::new(
///     AssetPair::new(a, b).expect("distinct"),
///     Address::from_bytes([9; 20]),
///     RouterPolicy::Open,
/// )
/// .expect("valid config");
///
/// let mut sandbox = Sandbox::new(cfg).expect("sandbox");
/// sandbox.faucet(&a, &alice, &Amount::new(2_000)).expect("known asset");
/// sandbox.faucet(&b, &alice, &Amount::new(2_000)).expect("known asset");
/// sandbox.deposit(&a, &alice, &Amount::new(2_000)).expect("funded");
/// sandbox.deposit(&b, &alice, &Amount::new(2_000)).expect("funded");
/// assert_eq!(sandbox.mint(&alice, &alice), Ok(Amount::new(1_000)));
/// ```
#[derive(Debug, Clone)]
pub struct Sandbox {
    engine: PoolEngine,
    asset0: InMemoryToken,
    asset1: InMemoryToken,
    liquidity: InMemoryToken,
    routers: RouterAllowList,
    clock: ManualClock,
    events: RecordingEventSink,
}

impl Sandbox {
    /// A fresh, empty pair.
    ///
    /// # Errors
    ///
    /// Propagates configuration validation errors.
    pub fn new(config: PairConfig) -> Result<Self, AmmError> {
        let engine = PoolEngine::from_config(&config)?;
        Ok(Self::around(engine))
    }

    /// Restores a persisted pair.  The pool's asset balances are seeded to
    /// match the reserves and the whole liquidity supply is parked at the
    /// zero address.
    ///
    /// # Errors
    ///
    /// Propagates configuration validation errors.
    pub fn from_state(config: PairConfig, state: PoolState) -> Result<Self, AmmError> {
        let engine = PoolEngine::from_state(config, state)?;
        let mut sandbox = Self::around(engine);
        let pool = sandbox.engine.config().pool();
        let reserves = sandbox.engine.get_reserves().clone();
        sandbox.asset0.credit(&pool, reserves.reserve0());
        sandbox.asset1.credit(&pool, reserves.reserve1());
        let supply = sandbox.engine.total_supply().clone();
        sandbox.liquidity.credit(&Address::zero(), &supply);
        sandbox.clock = ManualClock::at(reserves.block_timestamp_last());
        Ok(sandbox)
    }

    fn around(engine: PoolEngine) -> Self {
        let assets = *engine.config().assets();
        let pool = engine.config().pool();
        Self {
            asset0: InMemoryToken::new(assets.asset0()),
            asset1: InMemoryToken::new(assets.asset1()),
            liquidity: InMemoryToken::new(pool),
            routers: RouterAllowList::new(),
            clock: ManualClock::default(),
            events: RecordingEventSink::new(),
            engine,
        }
    }

    #[must_use]
    pub const fn engine(&self) -> &PoolEngine {
        &self.engine
    }

    #[must_use]
    pub const fn asset0(&self) -> &InMemoryToken {
        &self.asset0
    }

    #[must_use]
    pub const fn asset1(&self) -> &InMemoryToken {
        &self.asset1
    }

    #[must_use]
    pub const fn liquidity(&self) -> &InMemoryToken {
        &self.liquidity
    }

    #[must_use]
    pub const fn events(&self) -> &RecordingEventSink {
        &self.events
    }

    #[must_use]
    pub const fn clock(&self) -> &ManualClock {
        &self.clock
    }

    /// Mutable access to any of the three tokens by identity.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidArgument`] for an unknown token.
    pub fn token_mut(&mut self, id: &Address) -> Result<&mut InMemoryToken, AmmError> {
        [&mut self.asset0, &mut self.asset1, &mut self.liquidity]
            .into_iter()
            .find(|token| token.id() == *id)
            .ok_or(AmmError::InvalidArgument("unknown token"))
    }

    pub fn allow_router(&mut self, router: Address) {
        self.routers.allow(router);
    }

    pub fn revoke_router(&mut self, router: &Address) {
        self.routers.revoke(router);
    }

    pub fn advance_time(&mut self, seconds: u64) {
        self.clock.advance(seconds);
    }

    /// Turns the protocol fee on or off.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] for the zero address.
    pub fn set_fee_to(&mut self, fee_to: Option<Address>) -> Result<(), AmmError> {
        self.engine.set_fee_to(fee_to)
    }

    /// Credits `amount` of `asset` to `owner` out of thin air.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidArgument`] for an unknown token.
    pub fn faucet(
        &mut self,
        asset: &Address,
        owner: &Address,
        amount: &Amount,
    ) -> Result<(), AmmError> {
        self.token_mut(asset)?.credit(owner, amount);
        Ok(())
    }

    /// Transfers `amount` of a reserve asset from `from` to the pool, the
    /// way a depositor or swapper pre-positions tokens.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidArgument`] for an unknown token.
    /// - [`AmmError::TransferFailed`] if the token refuses.
    pub fn deposit(
        &mut self,
        asset: &Address,
        from: &Address,
        amount: &Amount,
    ) -> Result<(), AmmError> {
        let pool = self.engine.config().pool();
        if !self.token_mut(asset)?.transfer(from, &pool, amount) {
            return Err(AmmError::TransferFailed("deposit refused"));
        }
        Ok(())
    }

    /// Moves liquidity tokens between holders (use the pool address to
    /// prepare a burn).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`] if the holder is short.
    pub fn transfer_liquidity(
        &mut self,
        from: &Address,
        to: &Address,
        amount: &Amount,
    ) -> Result<(), AmmError> {
        if !self.liquidity.transfer(from, to, amount) {
            return Err(AmmError::TransferFailed("liquidity transfer refused"));
        }
        Ok(())
    }

    /// [`PoolEngine::mint`] as a transaction.
    ///
    /// # Errors
    ///
    /// Whatever the engine rejects the call with.
    pub fn mint(&mut self, caller: &Address, to: &Address) -> Result<Amount, AmmError> {
        self.transact(|engine, env| engine.mint(env, caller, to))
    }

    /// [`PoolEngine::burn`] as a transaction.
    ///
    /// # Errors
    ///
    /// Whatever the engine rejects the call with.
    pub fn burn(&mut self, caller: &Address, to: &Address) -> Result<(Amount, Amount), AmmError> {
        self.transact(|engine, env| engine.burn(env, caller, to))
    }

    /// [`PoolEngine::swap`] as a transaction.
    ///
    /// # Errors
    ///
    /// Whatever the engine rejects the call with.
    pub fn swap(
        &mut self,
        caller: &Address,
        amount0_out: &Amount,
        amount1_out: &Amount,
        to: &Address,
    ) -> Result<(), AmmError> {
        self.transact(|engine, env| engine.swap(env, caller, amount0_out, amount1_out, to))
    }

    /// Runs `op` with every collaborator wired in and restores all token
    /// balances if it fails.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `op`.
    pub fn transact<T, F>(&mut self, op: F) -> Result<T, AmmError>
    where
        F: FnOnce(&mut PoolEngine, &mut Collaborators<'_>) -> Result<T, AmmError>,
    {
        let snapshot = (
            self.asset0.clone(),
            self.asset1.clone(),
            self.liquidity.clone(),
        );
        let Self {
            engine,
            asset0,
            asset1,
            liquidity,
            routers,
            clock,
            events,
        } = self;
        let mut env = Collaborators {
            asset0,
            asset1,
            liquidity,
            authorization: &*routers,
            clock: &*clock,
            events,
        };
        let outcome = op(engine, &mut env);
        if outcome.is_err() {
            (self.asset0, self.asset1, self.liquidity) = snapshot;
        }
        outcome
    }
}
