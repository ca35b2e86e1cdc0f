//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use swap_pair::prelude::*;
//! ```

pub use crate::domain::{Address, Amount, AssetPair, PoolEvent, Reserves, Rounding, TokenMetadata};

pub use crate::traits::{
    AuthorizationCheck, Clock, EventSink, FromConfig, FungibleAsset, LiquidityToken,
};

pub use crate::math::CheckedArithmetic;

pub use crate::config::{PairConfig, RouterPolicy};

pub use crate::state::PoolState;

pub use crate::pool::{Collaborators, PoolEngine};

pub use crate::error::{AmmError, Result};
