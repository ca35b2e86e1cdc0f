//! Declarative pair configuration.
//!
//! [`PairConfig`] fixes everything about a pair that does not change with
//! trading: which assets it holds, its own address, who may call it, where
//! protocol fees go, and how its liquidity token describes itself.

mod pair_config;

pub use pair_config::{PairConfig, RouterPolicy};
