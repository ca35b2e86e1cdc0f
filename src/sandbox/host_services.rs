//! Router allow-list, clock and event recorder for the sandbox host.

use std::collections::BTreeSet;

use crate::domain::{Address, PoolEvent};
use crate::traits::{AuthorizationCheck, Clock, EventSink};

/// Set of callers allowed through the router gate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterAllowList {
    routers: BTreeSet<Address>,
}

impl RouterAllowList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `router` was newly added.
    pub fn allow(&mut self, router: Address) -> bool {
        self.routers.insert(router)
    }

    /// Returns `true` if `router` was present.
    pub fn revoke(&mut self, router: &Address) -> bool {
        self.routers.remove(router)
    }
}

impl AuthorizationCheck for RouterAllowList {
    fn is_authorized_router(&self, caller: &Address) -> bool {
        self.routers.contains(caller)
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualClock {
    now: u64,
}

impl ManualClock {
    #[must_use]
    pub const fn at(now: u64) -> Self {
        Self { now }
    }

    /// Moves time forward by `seconds`, saturating at `u64::MAX`.
    pub fn advance(&mut self, seconds: u64) {
        self.now = self.now.saturating_add(seconds);
    }
}

impl Clock for ManualClock {
    fn current_time(&self) -> u64 {
        self.now
    }
}

/// Keeps every emitted event and mirrors it to `tracing`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingEventSink {
    events: Vec<PoolEvent>,
}

impl RecordingEventSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    #[must_use]
    pub fn last(&self) -> Option<&PoolEvent> {
        self.events.last()
    }

    /// Returns and forgets everything recorded so far.
    pub fn drain(&mut self) -> Vec<PoolEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&mut self, event: PoolEvent) {
        tracing::info!(target: "swap_pair::events", event = event.name(), "{event}");
        self.events.push(event);
    }
}
