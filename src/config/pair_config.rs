//! Configuration for a constant-product pair.

use core::fmt;

use crate::domain::{Address, AssetPair, TokenMetadata};
use crate::error::AmmError;

/// Who may invoke mint, burn and swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouterPolicy {
    /// Any caller that pre-positioned its tokens may settle.
    Open,
    /// Only callers approved by the host's
    /// [`AuthorizationCheck`](crate::traits::AuthorizationCheck).
    #[default]
    RouterOnly,
}

impl RouterPolicy {
    /// Returns `true` if the router gate is enforced.
    #[must_use]
    pub const fn is_gated(&self) -> bool {
        matches!(self, Self::RouterOnly)
    }
}

impl fmt::Display for RouterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::RouterOnly => write!(f, "RouterOnly"),
        }
    }
}

/// Configuration for a constant-product pair (`x · y = k`).
///
/// # Validation
///
/// - The two assets are distinct and non-zero (enforced by [`AssetPair`]).
/// - The pool address is non-zero and differs from both assets.
/// - A configured protocol fee recipient is non-zero.
/// - Liquidity-token metadata is valid.
///
/// # Examples
///
/// ```
/// use swap_pair::config::{PairConfig, RouterPolicy};
/// use swap_pair::domain::{Address, AssetPair};
///
/// let assets = AssetPair::new(Address::from_bytes([1; 20]), Address::from_bytes([2; 20]))
///     .expect("distinct assets");
/// let cfg = PairConfig::new(assets, Address::from_bytes([9; 20]), RouterPolicy::Open)
///     .expect("valid config")
///     .with_fee_to(Some(Address::from_bytes([7; 20])))
///     .expect("valid fee recipient");
/// assert!(cfg.fee_to().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairConfig {
    assets: AssetPair,
    pool: Address,
    router_policy: RouterPolicy,
    fee_to: Option<Address>,
    metadata: TokenMetadata,
}

impl PairConfig {
    /// Creates a configuration with protocol fees off and default
    /// liquidity-token metadata.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the pool address is
    /// zero or collides with one of the assets.
    pub fn new(
        assets: AssetPair,
        pool: Address,
        router_policy: RouterPolicy,
    ) -> Result<Self, AmmError> {
        let config = Self {
            assets,
            pool,
            router_policy,
            fee_to: None,
            metadata: TokenMetadata::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets (or clears) the protocol fee recipient.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the recipient is the
    /// zero address.
    pub fn with_fee_to(mut self, fee_to: Option<Address>) -> Result<Self, AmmError> {
        self.fee_to = fee_to;
        self.validate()?;
        Ok(self)
    }

    /// Replaces the liquidity-token metadata.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the metadata is invalid.
    pub fn with_metadata(mut self, metadata: TokenMetadata) -> Result<Self, AmmError> {
        self.metadata = metadata;
        self.validate()?;
        Ok(self)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] on the first violated
    /// invariant.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.pool.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "pool address cannot be zero",
            ));
        }
        if self.assets.contains(&self.pool) {
            return Err(AmmError::InvalidConfiguration(
                "pool address cannot be one of its assets",
            ));
        }
        if self.fee_to.is_some_and(|to| to.is_zero()) {
            return Err(AmmError::InvalidConfiguration(
                "fee recipient cannot be the zero address",
            ));
        }
        self.metadata.validate()
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn assets(&self) -> &AssetPair {
        &self.assets
    }

    /// Returns the pool's own address (custodian of reserves).
    #[must_use]
    pub const fn pool(&self) -> Address {
        self.pool
    }

    /// Returns the caller policy.
    #[must_use]
    pub const fn router_policy(&self) -> RouterPolicy {
        self.router_policy
    }

    /// Returns the protocol fee recipient, if fees are on.
    #[must_use]
    pub const fn fee_to(&self) -> Option<Address> {
        self.fee_to
    }

    /// Returns the liquidity-token metadata.
    #[must_use]
    pub const fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }
}
