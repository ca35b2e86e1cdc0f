//! Persisted pair state.
//!
//! [`PoolState`] groups the three ledger entities the pair persists between
//! calls.  Each is stored under a fixed key (see [`keys`]); the storage
//! format itself belongs to the host.
//!
//! The engine loads a working copy at the start of every operation and
//! writes it back only once every check has passed.

mod protocol_fee;
mod reserve_ledger;
mod supply_ledger;

pub use protocol_fee::ProtocolFeeAccount;
pub use reserve_ledger::ReserveLedger;
pub use supply_ledger::LiquiditySupplyLedger;

use crate::domain::{Amount, Reserves};

/// Storage identifiers of the persisted entities.
pub mod keys {
    /// Reserve pair plus last commit timestamp.
    pub const RESERVE_PAIR: &str = "ReservePair";
    /// Total liquidity-token supply.
    pub const TOTAL_SUPPLY: &str = "TotalSupply";
    /// Protocol fee `kLast`.
    pub const K_LAST: &str = "KLast";
}

/// Everything the pair persists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolState {
    #[cfg_attr(feature = "serde", serde(rename = "ReservePair"))]
    pub(crate) reserves: ReserveLedger,
    #[cfg_attr(feature = "serde", serde(rename = "TotalSupply"))]
    pub(crate) supply: LiquiditySupplyLedger,
    #[cfg_attr(feature = "serde", serde(rename = "KLast"))]
    pub(crate) fee: ProtocolFeeAccount,
}

impl PoolState {
    /// Initial state: zero reserves, zero supply, no `kLast`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds state from the three persisted values.
    #[must_use]
    pub const fn from_parts(reserves: Reserves, total_supply: Amount, k_last: Amount) -> Self {
        Self {
            reserves: ReserveLedger::from_reserves(reserves),
            supply: LiquiditySupplyLedger::from_total_supply(total_supply),
            fee: ProtocolFeeAccount::from_k_last(k_last),
        }
    }

    #[must_use]
    pub const fn reserves(&self) -> &ReserveLedger {
        &self.reserves
    }

    #[must_use]
    pub const fn supply(&self) -> &LiquiditySupplyLedger {
        &self.supply
    }

    #[must_use]
    pub const fn fee(&self) -> &ProtocolFeeAccount {
        &self.fee
    }
}
