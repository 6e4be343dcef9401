//! Memory Cache Module
//!
//! In-process cache backend: HashMap storage with lazy TTL expiration and
//! cumulative hit/miss counters.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheBackend, CacheCounters, CacheEntry, Clock, SystemClock};
use crate::error::CacheResult;

#[derive(Debug, Default)]
struct CacheState {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Lookup statistics
    counters: CacheCounters,
}

// == Memory Cache ==
/// Thread-safe in-memory cache backend.
///
/// Expired entries are invisible to `get` immediately and are physically
/// removed either on access or by [`MemoryCache::purge_expired`].
#[derive(Debug)]
pub struct MemoryCache {
    state: RwLock<CacheState>,
    clock: Arc<dyn Clock>,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCache {
    // == Constructor ==
    /// Creates an empty cache that reads the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty cache driven by the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: RwLock::new(CacheState::default()),
            clock,
        }
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub async fn purge_expired(&self) -> usize {
        let now = self.clock.now_ms();
        let mut state = self.state.write().await;

        let before = state.entries.len();
        state.entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - state.entries.len();

        let remaining = state.entries.len();
        state.counters.set_entries(remaining);
        removed
    }

    // == Length ==
    /// Returns the number of stored entries, including expired ones not yet purged.
    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    // == Is Empty ==
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.entries.is_empty()
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let now = self.clock.now_ms();
        // Write lock: lookups update the counters
        let mut state = self.state.write().await;

        let live = match state.entries.get(key).map(|entry| entry.is_expired_at(now)) {
            Some(true) => {
                state.entries.remove(key);
                None
            }
            Some(false) => state.entries.get(key).map(|entry| entry.value.clone()),
            None => None,
        };

        match live {
            Some(_) => state.counters.record_hit(),
            None => state.counters.record_miss(),
        }
        let remaining = state.entries.len();
        state.counters.set_entries(remaining);

        Ok(live)
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()> {
        let entry = CacheEntry::new(value, Some(ttl), self.clock.now_ms());
        let mut state = self.state.write().await;

        state.entries.insert(key.to_string(), entry);
        let remaining = state.entries.len();
        state.counters.set_entries(remaining);
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        let mut state = self.state.write().await;

        state.entries.remove(key);
        let remaining = state.entries.len();
        state.counters.set_entries(remaining);
        Ok(())
    }

    async fn counters(&self) -> CacheResult<CacheCounters> {
        let state = self.state.read().await;
        let mut counters = state.counters;
        counters.set_entries(state.entries.len());
        Ok(counters)
    }
}
