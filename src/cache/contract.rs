//! Cache Contract Module
//!
//! The capability set every cache backend provides. All operations are async
//! so backends that actually perform I/O can be swapped in without changing
//! call sites.

use std::future::Future;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::cache::Expiry;
use crate::error::{BoxError, CacheError, Result};

// == Cache Trait ==
/// A key-value cache with time-based expiration.
///
/// A missing or expired key is not an error: `get` returns `Ok(None)` and
/// `has` returns `Ok(false)`. Errors come only from the serializer or, for
/// out-of-process backends, from the transport, and are passed through
/// unchanged.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Removes all entries from this cache.
    async fn clear(&self) -> Result<()>;

    /// Removes the value associated with `key`. Succeeds if the key is absent.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Gets the value associated with `key`, or `None` if it is absent or expired.
    async fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send;

    /// Returns true if this cache holds a live entry for `key`.
    async fn has(&self, key: &str) -> Result<bool>;

    /// Associates `value` with `key`, replacing any previous entry.
    ///
    /// Returns this cache so calls can be chained.
    async fn set<T>(&self, key: &str, value: &T, expiry: Expiry) -> Result<&Self>
    where
        T: Serialize + Sync + ?Sized;

    // == Get Or Create ==
    /// Gets the value for `key`, or fills it from `factory` on a miss.
    ///
    /// On a miss the factory runs once, its result is stored with `expiry`,
    /// and the value is then read back through `get`, so the caller receives
    /// what the serializer round trip produced. This is not atomic: two
    /// concurrent callers that both miss will both run their factory.
    ///
    /// A factory error is returned as [`CacheError::Factory`] and nothing is
    /// stored.
    async fn get_or_create<T, F, Fut, E>(&self, key: &str, factory: F, expiry: Expiry) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = std::result::Result<T, E>> + Send,
        E: Into<BoxError> + Send,
    {
        if !self.has(key).await? {
            debug!("Cache fill: {}", key);
            let value = factory().await.map_err(|err| CacheError::Factory(err.into()))?;
            self.set(key, &value, expiry).await?;
        }

        self.get::<T>(key)
            .await?
            .ok_or_else(|| CacheError::Vanished(key.to_string()))
    }
}
