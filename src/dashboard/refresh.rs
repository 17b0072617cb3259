//! Refresh propagation between dashboard views
//!
//! A mutation bumps a counter; each dependent view keeps an observer that
//! remembers the last value it fetched for and re-fetches whenever the value
//! differs. Any change triggers a fetch, not only an increase.

use serde::Serialize;

/// Monotonic invalidation counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RefreshCounter(u64);

impl RefreshCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// A view's memory of the counter value it last fetched for
#[derive(Debug, Clone, Default)]
pub struct RefreshObserver {
    seen: Option<u64>,
}

impl RefreshObserver {
    /// Observer that has never fetched
    pub fn new() -> Self {
        Self::default()
    }

    /// True before the first fetch and after any counter change
    pub fn needs_refetch(&self, counter: &RefreshCounter) -> bool {
        self.seen != Some(counter.value())
    }

    /// Record that data for `counter` has been fetched
    pub fn mark_fetched(&mut self, counter: &RefreshCounter) {
        self.seen = Some(counter.value());
    }

    /// Forget the last fetch so the next check re-fetches
    pub fn reset(&mut self) {
        self.seen = None;
    }
}
