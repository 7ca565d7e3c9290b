//! Cache Store Module
//!
//! The physical store behind memory backends: a HashMap of fully prefixed
//! keys to serialized entries, with lazy expiration on access.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats};

/// A store handle that several backends may share.
pub type SharedStore = Arc<RwLock<CacheStore>>;

// == Cache Store ==
/// Key-value storage with lazy TTL expiration.
///
/// Keys reaching the store are already namespaced by their backend; the
/// store compares them by exact string equality.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Activity counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store wrapped for sharing between backends.
    pub fn shared() -> SharedStore {
        Arc::new(RwLock::new(Self::new()))
    }

    // == Insert ==
    /// Stores an entry, replacing any previous entry under the same key.
    pub fn insert(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
        self.stats.record_set();
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the serialized value if the entry is live at `now`.
    ///
    /// An expired entry is removed and counted as a miss.
    pub fn get(&mut self, key: &str, now: Instant) -> Option<String> {
        self.purge_if_expired(key, now);

        match self.entries.get(key) {
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                trace!("Cache hit: {}", key);
                Some(value)
            }
            None => {
                self.stats.record_miss();
                trace!("Cache miss: {}", key);
                None
            }
        }
    }

    // == Contains ==
    /// Returns true if the entry is live at `now`, removing it if expired.
    pub fn contains(&mut self, key: &str, now: Instant) -> bool {
        self.purge_if_expired(key, now);
        self.entries.contains_key(key)
    }

    // == Remove ==
    /// Removes an entry by key. Returns whether anything was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.record_delete();
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Clear ==
    /// Removes every entry whose key starts with `prefix`, expired or not.
    ///
    /// An empty prefix empties the whole store. Matching is by plain string
    /// prefix, so clearing `"a"` also removes keys written under `"ab"`.
    pub fn clear_prefix(&mut self, prefix: &str) -> usize {
        let before = self.entries.len();
        if prefix.is_empty() {
            self.entries.clear();
        } else {
            self.entries.retain(|key, _| !key.starts_with(prefix));
        }

        self.stats.set_total_entries(self.entries.len());
        before - self.entries.len()
    }

    // == Cleanup Expired ==
    /// Removes all entries expired at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));

        let count = before - self.entries.len();
        self.stats.record_swept(count);
        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns a snapshot of the store statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the number of entries physically held, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn purge_if_expired(&mut self, key: &str, now: Instant) {
        let expired = self
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_expired_at(now));

        if expired {
            self.entries.remove(key);
            self.stats.record_expiration();
            self.stats.set_total_entries(self.entries.len());
            debug!("Evicted expired entry on access: {}", key);
        }
    }
}
