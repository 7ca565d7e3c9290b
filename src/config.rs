//! Configuration Module
//!
//! Loads cache configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::MemoryCacheOptions;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Default TTL in seconds for entries stored without an explicit duration, 0 = never
    pub default_duration: u64,
    /// Namespace prepended to every key
    pub key_prefix: String,
    /// Background sweep interval in seconds, 0 = no sweeper
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_DEFAULT_DURATION` - Default TTL in seconds (default: 0, never expires)
    /// - `CACHE_KEY_PREFIX` - Key namespace (default: empty)
    /// - `CACHE_SWEEP_INTERVAL` - Sweep frequency in seconds (default: 0, disabled)
    pub fn from_env() -> Self {
        Self {
            default_duration: env::var("CACHE_DEFAULT_DURATION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            key_prefix: env::var("CACHE_KEY_PREFIX").unwrap_or_default(),
            sweep_interval: env::var("CACHE_SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }

    /// Builds memory backend options with the default JSON serializer.
    pub fn memory_options(&self) -> MemoryCacheOptions {
        MemoryCacheOptions::new()
            .with_default_duration(self.default_duration)
            .with_key_prefix(self.key_prefix.clone())
    }

    /// Returns the sweep interval, or None when sweeping is disabled.
    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval > 0).then(|| Duration::from_secs(self.sweep_interval))
    }
}
