//! Tracked reserves and their single-write commit.

use crate::domain::{Amount, PoolEvent, Reserves};

/// Owns the pair's reserve record.
///
/// The only mutation is [`commit`](ReserveLedger::commit), which replaces
/// both reserves and the timestamp together, so a reader never observes a
/// reserve pair that mixes pre- and post-call values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ReserveLedger {
    reserves: Reserves,
}

impl ReserveLedger {
    /// An empty ledger: both reserves zero, timestamp zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a ledger from a persisted snapshot.
    #[must_use]
    pub const fn from_reserves(reserves: Reserves) -> Self {
        Self { reserves }
    }

    /// Current reserves.
    #[must_use]
    pub const fn reserves(&self) -> &Reserves {
        &self.reserves
    }

    /// Overwrites both reserves and the timestamp in one write and returns
    /// the `Synced` event describing the new pair.
    pub fn commit(&mut self, balance0: Amount, balance1: Amount, timestamp: u64) -> PoolEvent {
        let event = PoolEvent::Synced {
            reserve0: balance0.clone(),
            reserve1: balance1.clone(),
        };
        self.reserves = Reserves::new(balance0, balance1, timestamp);
        event
    }
}
