//! Request-scoped round-trip counter.
//!
//! One counter is created per report request and passed by reference into
//! the fetch strategy. Concurrent requests each own their counter, so counts
//! never bleed between them.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts database round trips issued on behalf of a single request.
#[derive(Debug, Default)]
pub struct QueryCounter {
    count: AtomicUsize,
}

impl QueryCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one round trip. `label` names the query for the debug log.
    pub fn record(&self, label: &'static str) {
        let n = self.count.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(query = label, round_trip = n, "Database round trip");
    }

    /// Number of round trips recorded so far.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }
}
