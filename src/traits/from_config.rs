//! Construction of an engine from its configuration.
//!
//! # Validation Contract
//!
//! Implementations **must** validate the configuration during construction.
//! A successfully constructed engine starts in a valid initial state:
//! empty reserves, zero supply and no recorded `kLast`.

use crate::error::AmmError;

/// Builds `Self` from a configuration value.
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfiguration`] if the configuration is
/// invalid.
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// The configuration is taken by reference so it can be reused, e.g.
    /// to restore a persisted engine with
    /// [`PoolEngine::from_state`](crate::pool::PoolEngine::from_state).
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if any parameter is out of range
    ///   or inconsistent.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
