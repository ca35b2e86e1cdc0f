//! Value types shared by the settlement core.
//!
//! Amounts are unbounded non-negative integers; addresses are 20-byte
//! script hashes.  Constructors validate their invariants so the engine
//! only ever sees well-formed values.

mod address;
mod amount;
mod asset_pair;
mod event;
mod reserves;
mod rounding;
mod token_metadata;

pub use address::Address;
pub use amount::Amount;
pub use asset_pair::AssetPair;
pub use event::PoolEvent;
pub use reserves::Reserves;
pub use rounding::Rounding;
pub use token_metadata::{Decimals, TokenMetadata};
