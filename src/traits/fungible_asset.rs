//! Capability interfaces for the assets the pair moves.
//!
//! The pair never resolves contracts by name at runtime; the host injects
//! one [`FungibleAsset`] per reserve asset and one [`LiquidityToken`] for
//! the pair's own claim token.
//!
//! # Failure Signalling
//!
//! `transfer`, `mint` and `burn` return `false` when the asset refuses the
//! movement (insufficient balance, paused contract, ...).  The engine turns
//! a `false` into [`AmmError::TransferFailed`](crate::error::AmmError) and
//! aborts the whole operation; the host rolls back anything the asset had
//! already recorded.

use crate::domain::{Address, Amount};

/// A fungible asset contract.
///
/// # Contract
///
/// - `balance_of` is a pure read: two calls without an intervening
///   movement return the same value.
/// - A successful `transfer` debits `from` and credits `to` by exactly
///   `amount`.
pub trait FungibleAsset {
    /// The asset contract's own address.
    #[must_use]
    fn id(&self) -> Address;

    /// Current balance of `owner`.
    #[must_use]
    fn balance_of(&self, owner: &Address) -> Amount;

    /// Moves `amount` from `from` to `to`, returning `false` on refusal.
    fn transfer(&mut self, from: &Address, to: &Address, amount: &Amount) -> bool;
}

/// The liquidity token: a fungible asset whose supply the pair adjusts.
///
/// Holder balances live in the token; the pair tracks total supply
/// itself and pairs every supply change with one of these calls.
pub trait LiquidityToken: FungibleAsset {
    /// Credits `amount` to `to` out of nothing.
    fn mint(&mut self, to: &Address, amount: &Amount) -> bool;

    /// Debits `amount` from `from`, destroying it.
    fn burn(&mut self, from: &Address, amount: &Amount) -> bool;
}
