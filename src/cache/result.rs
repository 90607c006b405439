//! Memoization of assembled prompts.

use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::FifoCache;
use crate::telemetry;

/// Default maximum number of cached results.
pub const DEFAULT_MAX_ENTRIES: usize = 50;

/// Configuration for the result cache.
///
/// ```rust
/// # use lightprompt::CacheConfig;
/// let config = CacheConfig::new().max_entries(200);
/// assert_eq!(config.max_entries, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of cached results. Default: 50.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl CacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of cached results (clamped to at least 1).
    pub fn max_entries(mut self, n: usize) -> Self {
        self.max_entries = n;
        self
    }
}

/// Thread-safe FIFO memo table.
///
/// Insert and eviction happen under one lock, so the size bound holds at
/// every observable point. There is no expiry and no invalidation: entries
/// leave only when newer ones push them out.
#[derive(Debug)]
pub struct ResultCache<K, V> {
    entries: Mutex<FifoCache<K, V>>,
}

impl<K, V> ResultCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            entries: Mutex::new(FifoCache::new(config.max_entries)),
        }
    }

    /// Return the cached value for `key`, or compute, store and return it.
    ///
    /// `compute` runs only on a miss and outside the lock. If another caller
    /// stored the same key meanwhile, that value wins and is returned.
    pub fn get_or_compute<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(hit) = self.get(&key) {
            metrics::counter!(telemetry::CACHE_HITS_TOTAL).increment(1);
            return hit;
        }
        metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);

        let value = compute();

        let mut entries = self.lock();
        if let Some(existing) = entries.get(&key) {
            return existing.clone();
        }
        if entries.insert(key, value.clone()).is_some() {
            metrics::counter!(telemetry::CACHE_EVICTIONS_TOTAL).increment(1);
            debug!(capacity = entries.capacity(), "evicted oldest cached result");
        }
        value
    }

    /// Look up without computing. Does not affect eviction order.
    pub fn get(&self, key: &K) -> Option<V> {
        self.lock().get(key).cloned()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    // A panic while holding the lock cannot leave the map half-updated
    // in a way that matters here, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, FifoCache<K, V>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, V> Default for ResultCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}
