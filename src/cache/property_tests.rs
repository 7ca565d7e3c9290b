//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the memory backend against a plain HashMap model.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio_test::block_on;

use crate::cache::{Cache, CacheStore, Expiry, MemoryCache, MemoryCacheOptions};

// == Strategies ==
/// Generates cache keys, including characters that must not be normalized
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_: ]{0,32}"
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Record {
    id: u64,
    name: String,
    tags: Vec<String>,
    score: Option<i32>,
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        any::<u64>(),
        ".{0,40}",
        prop::collection::vec("[a-z]{1,8}", 0..5),
        any::<Option<i32>>(),
    )
        .prop_map(|(id, name, tags, score)| Record {
            id,
            name,
            tags,
            score,
        })
}

/// A sequence of cache operations for model checking
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: Record },
    Get { key: String },
    Has { key: String },
    Delete { key: String },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    // Few distinct keys so operations collide
    let key = "[abc]{1,2}";
    prop_oneof![
        4 => (key, record_strategy()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        4 => key.prop_map(|key| CacheOp::Get { key }),
        2 => key.prop_map(|key| CacheOp::Has { key }),
        2 => key.prop_map(|key| CacheOp::Delete { key }),
        1 => Just(CacheOp::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a value and reading it back returns an equal value.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in record_strategy()) {
        let cache = MemoryCache::default();

        let retrieved: Option<Record> = block_on(async {
            cache.set(&key, &value, Expiry::Default).await.unwrap();
            cache.get(&key).await.unwrap()
        });

        prop_assert_eq!(retrieved, Some(value));
    }

    // A later set on the same key wins and leaves a single entry.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        first in record_strategy(),
        second in record_strategy()
    ) {
        let cache = MemoryCache::default();

        let retrieved: Option<Record> = block_on(async {
            cache.set(&key, &first, Expiry::seconds(60)).await.unwrap();
            cache.set(&key, &second, Expiry::Never).await.unwrap();
            cache.get(&key).await.unwrap()
        });

        prop_assert_eq!(retrieved, Some(second));
        prop_assert_eq!(block_on(cache.len()), 1);
    }

    // After delete, the key reads as absent.
    #[test]
    fn prop_delete_removes_entry(key in key_strategy(), value in record_strategy()) {
        let cache = MemoryCache::default();

        let (before, after, retrieved) = block_on(async {
            cache.set(&key, &value, Expiry::Default).await.unwrap();
            let before = cache.has(&key).await.unwrap();
            cache.delete(&key).await.unwrap();
            let after = cache.has(&key).await.unwrap();
            let retrieved: Option<Record> = cache.get(&key).await.unwrap();
            (before, after, retrieved)
        });

        prop_assert!(before, "Key should exist before delete");
        prop_assert!(!after, "Key should not exist after delete");
        prop_assert!(retrieved.is_none());
    }

    // Two prefixes on one store never see each other's entries.
    #[test]
    fn prop_prefix_isolation(
        key in key_strategy(),
        left in record_strategy(),
        right in record_strategy()
    ) {
        let store = CacheStore::shared();
        let a_options = MemoryCacheOptions::new().with_key_prefix("a:");
        let b_options = MemoryCacheOptions::new().with_key_prefix("b:");
        let a = MemoryCache::with_store(store.clone(), a_options);
        let b = MemoryCache::with_store(store, b_options);

        let (from_a, from_b) = block_on(async {
            a.set(&key, &left, Expiry::Default).await.unwrap();
            b.set(&key, &right, Expiry::Default).await.unwrap();
            let from_a: Option<Record> = a.get(&key).await.unwrap();
            let from_b: Option<Record> = b.get(&key).await.unwrap();
            (from_a, from_b)
        });

        prop_assert_eq!(from_a, Some(left));
        prop_assert_eq!(from_b, Some(right));
    }

    // Negative signed durations always resolve to the configured default.
    #[test]
    fn prop_negative_duration_uses_default(secs in i64::MIN..0, default in 0u64..10_000) {
        let resolved = Expiry::from(secs).resolve(std::time::Duration::from_secs(default));
        let expected = Expiry::Default.resolve(std::time::Duration::from_secs(default));
        prop_assert_eq!(resolved, expected);
    }

    // Any operation sequence behaves like a HashMap, and the store's read
    // counters match the number of hits and misses observed.
    #[test]
    fn prop_matches_hashmap_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let cache = MemoryCache::default();
        let mut model: HashMap<String, Record> = HashMap::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    block_on(cache.set(&key, &value, Expiry::Default)).unwrap();
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    let got: Option<Record> = block_on(cache.get(&key)).unwrap();
                    match &got {
                        Some(_) => expected_hits += 1,
                        None => expected_misses += 1,
                    }
                    prop_assert_eq!(got.as_ref(), model.get(&key), "Get mismatch for {}", key);
                }
                CacheOp::Has { key } => {
                    let has = block_on(cache.has(&key)).unwrap();
                    prop_assert_eq!(has, model.contains_key(&key), "Has mismatch for {}", key);
                }
                CacheOp::Delete { key } => {
                    block_on(cache.delete(&key)).unwrap();
                    model.remove(&key);
                }
                CacheOp::Clear => {
                    block_on(cache.clear()).unwrap();
                    model.clear();
                }
            }
        }

        let stats = block_on(cache.stats());
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, model.len(), "Total entries mismatch");
    }
}

// == Concurrent Operation Correctness ==
proptest! {
    #![proptest_config(ProptestConfig::with_cases(25))]

    // Concurrent readers only ever observe a complete record that some
    // writer stored, never a torn or foreign value.
    #[test]
    fn prop_concurrent_reads_see_whole_values(
        writes in prop::collection::vec(record_strategy(), 1..20)
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let cache = Arc::new(MemoryCache::default());
            let mut handles = vec![];

            for value in writes.clone() {
                let cache = Arc::clone(&cache);
                handles.push(tokio::spawn(async move {
                    cache.set("shared", &value, Expiry::Default).await.unwrap();
                    cache.get::<Record>("shared").await.unwrap()
                }));
            }

            for handle in handles {
                let seen = handle.await.expect("Task should not panic");
                let seen = seen.expect("A value was written before this read");
                prop_assert!(writes.contains(&seen), "Read a value nobody wrote: {:?}", seen);
            }

            let last: Option<Record> = cache.get("shared").await.unwrap();
            prop_assert!(last.is_some_and(|last| writes.contains(&last)));
            Ok(())
        })?;
    }
}
