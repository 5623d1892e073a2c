//! Short-lived computation cache keyed by serialized argument signatures.
//!
//! The cache holds JSON values so one map can serve every operation's
//! result type. Entries expire after the configured TTL; the caller owns
//! semantic invalidation (the cache cannot tell that the underlying
//! dataset changed inside the window).

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

struct CacheEntry {
    stored_at: Instant,
    value: Value,
}

/// TTL cache with hit/miss counters. Counters exist so tests can assert
/// that a repeated call inside the window skipped recomputation.
pub struct TtlCache {
    ttl: Duration,
    entries: HashMap<String, CacheEntry>,
    hits: u64,
    misses: u64,
}

impl TtlCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entries: HashMap::new(), hits: 0, misses: 0 }
    }

    /// Return the cached value for `key` if fresh, otherwise run
    /// `compute`, store the result and return it. A value that fails to
    /// round-trip through JSON is returned uncached.
    pub fn get_or_compute<T, F>(&mut self, key: String, compute: F) -> T
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        if let Some(entry) = self.entries.get(&key) {
            if entry.stored_at.elapsed() < self.ttl {
                if let Ok(value) = serde_json::from_value(entry.value.clone()) {
                    self.hits += 1;
                    return value;
                }
            }
        }

        self.misses += 1;
        let value = compute();
        if let Ok(serialized) = serde_json::to_value(&value) {
            self.entries.insert(key, CacheEntry { stored_at: Instant::now(), value: serialized });
        } else {
            log::warn!("analytics result not cacheable; returning uncached");
        }
        value
    }

    /// Evict one entry.
    pub fn clear(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Evict everything.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
