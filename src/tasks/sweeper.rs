//! Expired Entry Sweeper
//!
//! Optional background task that periodically purges expired entries from a
//! store. Reads never depend on it: expiry is always checked on access.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::SharedStore;

/// Spawns a background task that periodically removes expired entries.
///
/// The task runs until aborted, sleeping for `interval` between sweeps and
/// taking the store's write lock only for the duration of each sweep.
///
/// # Arguments
/// * `store` - The store to sweep, possibly shared by several caches
/// * `interval` - Time between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort it during
/// shutdown, or None when `interval` is zero and no task was spawned.
///
/// # Example
/// ```ignore
/// let cache = MemoryCache::default();
/// let sweeper = spawn_sweeper(cache.store(), Duration::from_secs(30));
/// // Later, during shutdown:
/// if let Some(sweeper) = sweeper {
///     sweeper.abort();
/// }
/// ```
pub fn spawn_sweeper(store: SharedStore, interval: Duration) -> Option<JoinHandle<()>> {
    if interval.is_zero() {
        warn!("Sweeper interval is zero, not starting the sweeper");
        return None;
    }

    Some(tokio::spawn(async move {
        info!("Starting expired entry sweeper with interval of {:?}", interval);

        let mut ticker = time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let removed = store.write().await.cleanup_expired(Instant::now());

            if removed > 0 {
                info!("Sweep removed {} expired entries", removed);
            } else {
                debug!("Sweep found no expired entries");
            }
        }
    }))
}
