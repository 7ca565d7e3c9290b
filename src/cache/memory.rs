//! Memory Cache Module
//!
//! In-process backend for the [`Cache`] contract. Entries are serialized on
//! write and checked for expiry lazily on access; nothing sweeps them unless
//! a sweeper task is started for the store.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::cache::{Cache, CacheEntry, CacheStats, CacheStore, Expiry, SharedStore};
use crate::error::Result;
use crate::serializer::Serializer;

// == Options ==
/// Construction-time settings of a [`MemoryCache`].
#[derive(Debug, Clone, Default)]
pub struct MemoryCacheOptions {
    /// Seconds before an entry expires when `set` uses [`Expiry::Default`]; 0 = never
    pub default_duration: u64,
    /// String prefixed to every key so namespaces sharing a store never collide
    pub key_prefix: String,
    /// Codec used to store values as text
    pub serializer: Serializer,
}

impl MemoryCacheOptions {
    /// Options for a never-expiring, unprefixed, JSON-encoded cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default lifetime in seconds; 0 = never expires.
    pub fn with_default_duration(mut self, seconds: u64) -> Self {
        self.default_duration = seconds;
        self
    }

    /// Sets the namespace prepended to every key.
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Replaces the default JSON codec.
    pub fn with_serializer(mut self, serializer: Serializer) -> Self {
        self.serializer = serializer;
        self
    }
}

// == Memory Cache ==
/// A cache backed by a process-local [`CacheStore`].
#[derive(Debug)]
pub struct MemoryCache {
    store: SharedStore,
    default_duration: Duration,
    key_prefix: String,
    serializer: Serializer,
}

impl MemoryCache {
    // == Constructor ==
    /// Creates a cache with its own private store.
    pub fn new(options: MemoryCacheOptions) -> Self {
        Self::with_store(CacheStore::shared(), options)
    }

    /// Creates a cache on top of an existing, possibly shared, store.
    ///
    /// Instances sharing a store must use distinct key prefixes, and no
    /// prefix may start with another (`"a"` and `"ab"` collide): keys and
    /// `clear` match prefixes by plain string comparison.
    pub fn with_store(store: SharedStore, options: MemoryCacheOptions) -> Self {
        Self {
            store,
            default_duration: Duration::from_secs(options.default_duration),
            key_prefix: options.key_prefix,
            serializer: options.serializer,
        }
    }

    /// Returns a handle to the underlying store.
    pub fn store(&self) -> SharedStore {
        self.store.clone()
    }

    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }

    /// Returns a snapshot of the store statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    /// Number of entries physically held by the store, expired ones included.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(MemoryCacheOptions::default())
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn clear(&self) -> Result<()> {
        let removed = self.store.write().await.clear_prefix(&self.key_prefix);
        info!("Cleared {} entries under prefix {:?}", removed, self.key_prefix);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let key = self.build_key(key);
        if self.store.write().await.remove(&key) {
            debug!("Deleted entry: {}", key);
        }
        Ok(())
    }

    async fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        let key = self.build_key(key);
        let text = self.store.write().await.get(&key, Instant::now());

        text.map(|text| self.serializer.unserialize(&text))
            .transpose()
    }

    async fn has(&self, key: &str) -> Result<bool> {
        let key = self.build_key(key);
        Ok(self.store.write().await.contains(&key, Instant::now()))
    }

    async fn set<T>(&self, key: &str, value: &T, expiry: Expiry) -> Result<&Self>
    where
        T: Serialize + Sync + ?Sized,
    {
        let text = self.serializer.serialize(value)?;
        let ttl = expiry.resolve(self.default_duration);
        let key = self.build_key(key);

        debug!("Storing entry: {} (ttl: {:?})", key, ttl);
        let entry = CacheEntry::new(text, ttl, Instant::now());
        self.store.write().await.insert(key, entry);

        Ok(self)
    }
}
