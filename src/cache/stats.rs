//! Cache Statistics Module
//!
//! Tracks timer activity of a timed map: how many entries expired on their
//! own and how many pending expiries were cancelled.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of timed map counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of entries removed by their own expiry timer
    pub expirations: u64,
    /// Number of pending expiry timers cancelled by set, delete or clear
    pub cancellations: u64,
    /// Current number of entries in the map
    pub total_entries: usize,
    /// Current number of scheduled, not yet fired expiry timers
    pub pending_timers: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Expiration ==
    /// Increments the expiration counter.
    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    // == Record Cancellations ==
    /// Adds `count` to the cancellation counter.
    pub fn record_cancellations(&mut self, count: usize) {
        self.cancellations += count as u64;
    }

    // == Update Gauges ==
    /// Updates the entry and pending timer counts.
    pub fn set_gauges(&mut self, total_entries: usize, pending_timers: usize) {
        self.total_entries = total_entries;
        self.pending_timers = pending_timers;
    }
}
