//! Side channel for domain events.

use crate::domain::PoolEvent;

/// Receives [`PoolEvent`]s after a state transition commits.
///
/// Fire-and-forget: emission cannot fail and never influences control
/// flow.
pub trait EventSink {
    /// Records or forwards `event`.
    fn emit(&mut self, event: PoolEvent);
}

impl EventSink for Vec<PoolEvent> {
    fn emit(&mut self, event: PoolEvent) {
        self.push(event);
    }
}

/// Forwards every event to `tracing` at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&mut self, event: PoolEvent) {
        tracing::info!(target: "swap_pair::events", event = event.name(), "{event}");
    }
}
