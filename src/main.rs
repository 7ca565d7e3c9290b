//! Mini Cache demo
//!
//! Builds a memory cache from environment configuration and walks through
//! the basic cache operations, logging each result.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mini_cache::{spawn_sweeper, Cache, Config, Expiry, MemoryCache};

#[derive(Debug, Serialize, Deserialize)]
struct User {
    name: String,
}

/// Main entry point for the demo.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the memory cache and, if configured, its sweeper
/// 4. Run the cache walkthrough
/// 5. With a sweeper running, wait for Ctrl+C before exiting
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mini_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: default_duration={}s, key_prefix={:?}, sweep_interval={}s",
        config.default_duration, config.key_prefix, config.sweep_interval
    );

    let cache = MemoryCache::new(config.memory_options());
    let sweeper = config
        .sweep_interval()
        .and_then(|interval| spawn_sweeper(cache.store(), interval));

    run_walkthrough(&cache).await?;

    let stats = cache.stats().await;
    info!(
        "Cache stats: hits={}, misses={}, sets={}, entries={}, hit_rate={:.2}",
        stats.hits,
        stats.misses,
        stats.sets,
        stats.total_entries,
        stats.hit_rate()
    );

    if let Some(sweeper) = sweeper {
        info!("Sweeper running, press Ctrl+C to exit");
        signal::ctrl_c()
            .await
            .context("failed to install Ctrl+C handler")?;
        sweeper.abort();
        warn!("Sweeper aborted");
    }

    Ok(())
}

async fn run_walkthrough(cache: &MemoryCache) -> anyhow::Result<()> {
    cache
        .set("user:1", &User { name: "Ada".to_string() }, Expiry::Default)
        .await?;
    let user: Option<User> = cache.get("user:1").await?;
    info!("get(user:1) -> {:?}", user);

    cache.delete("user:1").await?;
    let user: Option<User> = cache.get("user:1").await?;
    info!("get(user:1) after delete -> {:?}", user);

    let created: User = cache
        .get_or_create(
            "user:1",
            || async {
                Ok::<_, anyhow::Error>(User {
                    name: "Grace".to_string(),
                })
            },
            Expiry::seconds(10),
        )
        .await?;
    info!("get_or_create(user:1) -> {:?}", created);

    let cached: User = cache
        .get_or_create(
            "user:1",
            || async {
                Ok::<_, anyhow::Error>(User {
                    name: "Other".to_string(),
                })
            },
            Expiry::seconds(10),
        )
        .await?;
    info!("get_or_create(user:1) again -> {:?}", cached);

    Ok(())
}
