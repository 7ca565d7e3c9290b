//! Cache Statistics Module
//!
//! Tracks store activity: hits, misses, writes, and expired entries removed.

use serde::Serialize;

// == Cache Stats ==
/// Counters for one physical store, shared by every namespace on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Reads that found a live entry
    pub hits: u64,
    /// Reads that found nothing or an expired entry
    pub misses: u64,
    /// Entries written by `set`
    pub sets: u64,
    /// Entries removed by `delete`
    pub deletes: u64,
    /// Expired entries purged lazily on access
    pub expirations: u64,
    /// Expired entries purged by the background sweeper
    pub swept: u64,
    /// Current number of entries physically held (expired ones included)
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Increments the write counter.
    pub fn record_set(&mut self) {
        self.sets += 1;
    }

    /// Increments the delete counter.
    pub fn record_delete(&mut self) {
        self.deletes += 1;
    }

    /// Increments the lazy expiration counter.
    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    /// Adds entries removed by one sweep.
    pub fn record_swept(&mut self, count: usize) {
        self.swept += count as u64;
    }

    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
