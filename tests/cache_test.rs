//! Tests for [`ResultCache`]: bounded FIFO memoization.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use lightprompt::cache::{CacheConfig, ResultCache};

// =========================================================================
// Capacity and eviction
// =========================================================================

#[test]
fn fifty_one_keys_evict_the_first() {
    let cache: ResultCache<String, String> = ResultCache::default();
    for i in 0..51 {
        cache.get_or_compute(format!("key-{i}"), || format!("value-{i}"));
    }
    assert_eq!(cache.len(), 50);
    assert!(!cache.contains(&"key-0".to_string()));
    for i in 1..51 {
        assert_eq!(cache.get(&format!("key-{i}")), Some(format!("value-{i}")));
    }
}

#[test]
fn hits_do_not_protect_old_entries() {
    let cache: ResultCache<u32, u32> = ResultCache::new(&CacheConfig::new().max_entries(3));
    cache.get_or_compute(1, || 1);
    cache.get_or_compute(2, || 2);
    cache.get_or_compute(3, || 3);

    // Touch the oldest entry; FIFO ignores it.
    assert_eq!(cache.get_or_compute(1, || unreachable!()), 1);

    cache.get_or_compute(4, || 4);
    assert!(!cache.contains(&1));
    assert!(cache.contains(&2));
    assert!(cache.contains(&3));
    assert!(cache.contains(&4));
}

#[test]
fn recomputes_after_eviction() {
    let cache: ResultCache<u32, u32> = ResultCache::new(&CacheConfig::new().max_entries(1));
    let calls = AtomicUsize::new(0);
    let compute = || {
        calls.fetch_add(1, Ordering::SeqCst);
        7
    };
    cache.get_or_compute(1, compute);
    cache.get_or_compute(2, compute);
    cache.get_or_compute(1, compute);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

// =========================================================================
// Recomputation
// =========================================================================

#[test]
fn hit_returns_same_shared_value() {
    let cache: ResultCache<&'static str, Arc<String>> = ResultCache::default();
    let calls = AtomicUsize::new(0);
    let compute = || {
        calls.fetch_add(1, Ordering::SeqCst);
        Arc::new("prompt".to_string())
    };
    let first = cache.get_or_compute("k", compute);
    let second = cache.get_or_compute("k", compute);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn get_misses_without_computing() {
    let cache: ResultCache<u32, u32> = ResultCache::default();
    assert!(cache.get(&1).is_none());
    assert!(cache.is_empty());
}

// =========================================================================
// Concurrency
// =========================================================================

#[test]
fn concurrent_inserts_respect_capacity() {
    let cache: Arc<ResultCache<u32, u32>> =
        Arc::new(ResultCache::new(&CacheConfig::new().max_entries(16)));
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..100 {
                    let key = t * 1000 + i;
                    assert_eq!(cache.get_or_compute(key, || key + 1), key + 1);
                    assert!(cache.len() <= 16);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().expect("thread panicked");
    }
    assert_eq!(cache.len(), 16);
}
