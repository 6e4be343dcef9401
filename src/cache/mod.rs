//! Cache Module
//!
//! The cache backend contract consumed by the listing cache, plus an
//! in-process implementation with TTL expiration and hit/miss counters.

mod clock;
mod entry;
mod memory;
mod stats;

#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::CacheResult;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use memory::MemoryCache;
pub use stats::CacheCounters;

// == Cache Backend ==
/// Key-value store with TTL support.
///
/// Each call is individually atomic; nothing spanning several calls is.
/// Implementations may be a networked store or an in-process map.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Returns the live value stored under `key`, or `None` on a miss.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous value and
    /// resetting its TTL.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()>;

    /// Removes `key`. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> CacheResult<()>;

    /// Cumulative hit/miss counters kept by the backend itself.
    async fn counters(&self) -> CacheResult<CacheCounters>;
}
