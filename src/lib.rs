//! Mini Cache - A pluggable-backend key-value cache
//!
//! Provides an async cache contract with TTL expiration, a serializer seam,
//! and an in-memory backend with lazy expiry.

pub mod cache;
pub mod config;
pub mod error;
pub mod serializer;
pub mod tasks;

pub use cache::{Cache, Expiry, MemoryCache, MemoryCacheOptions};
pub use config::Config;
pub use error::{CacheError, Result};
pub use serializer::Serializer;
pub use tasks::spawn_sweeper;
