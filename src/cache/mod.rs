//! Cache Module
//!
//! The cache contract, its in-memory backend, and the store and entry types
//! that back it.

mod contract;
mod entry;
mod expiry;
mod memory;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use contract::Cache;
pub use entry::CacheEntry;
pub use expiry::Expiry;
pub use memory::{MemoryCache, MemoryCacheOptions};
pub use stats::CacheStats;
pub use store::{CacheStore, SharedStore};
