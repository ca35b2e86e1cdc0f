//! In-memory host for running the pair outside a ledger.
//!
//! Provides a map-backed [`InMemoryToken`], a [`RouterAllowList`], a
//! [`ManualClock`] and a [`RecordingEventSink`], and wires them into a
//! [`Sandbox`] that executes every engine call as a transaction: token
//! balances are snapshotted first and restored if the call fails, which is
//! the all-or-nothing rollback a real ledger provides.

mod host;
mod host_services;
mod in_memory_token;

#[cfg(test)]
pub(crate) mod fixtures;

pub use host::Sandbox;
pub use host_services::{ManualClock, RecordingEventSink, RouterAllowList};
pub use in_memory_token::InMemoryToken;
