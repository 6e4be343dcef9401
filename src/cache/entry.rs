//! Cache Entry Module
//!
//! A stored value together with its expiry deadline.

use std::time::Duration;

// == Cache Entry ==
/// A single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored (already serialized) value
    pub value: String,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry written at `now_ms`, expiring `ttl` later.
    pub fn new(value: String, ttl: Option<Duration>, now_ms: u64) -> Self {
        let expires_at = ttl.map(|ttl| {
            let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
            now_ms.saturating_add(ttl_ms)
        });

        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired at `now_ms`.
    ///
    /// An entry is expired once `now_ms >= expires_at`, so an entry written
    /// with a TTL of N seconds is gone exactly N seconds later.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        match self.expires_at {
            Some(expires) => now_ms >= expires,
            None => false,
        }
    }
}
