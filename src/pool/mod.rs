//! The pair engine.
//!
//! [`PoolEngine`] owns the configuration and the persisted [`PoolState`]
//! and exposes the three settlement operations plus read-only getters:
//!
//! | Operation | Reads | Writes |
//! |-----------|-------|--------|
//! | [`mint`](PoolEngine::mint) | balances − reserves | supply, reserves, `kLast` |
//! | [`burn`](PoolEngine::burn) | pool's own liquidity | supply, reserves, `kLast` |
//! | [`swap`](PoolEngine::swap) | balances after outputs | reserves |
//!
//! Each operation borrows its [`Collaborators`] from the host for the
//! duration of the call.
//!
//! [`PoolState`]: crate::state::PoolState

mod burn;
mod collaborators;
mod engine;
mod mint;
mod swap;

#[cfg(test)]
mod proptest_properties;

pub use collaborators::Collaborators;
pub use engine::PoolEngine;
