//! Cache backend fakes for unit tests.

use std::time::Duration;

use async_trait::async_trait;

use crate::cache::{CacheBackend, CacheCounters, MemoryCache};
use crate::error::{CacheError, CacheResult};

/// Wraps a `MemoryCache` and fails the selected operations.
#[derive(Debug, Default)]
pub struct FaultyCache {
    pub inner: MemoryCache,
    pub fail_get: bool,
    pub fail_set: bool,
    pub fail_delete: bool,
    pub fail_counters: bool,
}

impl FaultyCache {
    /// A backend on which every call fails.
    pub fn unreachable() -> Self {
        Self {
            fail_get: true,
            fail_set: true,
            fail_delete: true,
            fail_counters: true,
            ..Self::default()
        }
    }
}

fn refused() -> CacheError {
    CacheError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl CacheBackend for FaultyCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        if self.fail_get {
            return Err(refused());
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()> {
        if self.fail_set {
            return Err(refused());
        }
        self.inner.set(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        if self.fail_delete {
            return Err(refused());
        }
        self.inner.delete(key).await
    }

    async fn counters(&self) -> CacheResult<CacheCounters> {
        if self.fail_counters {
            return Err(refused());
        }
        self.inner.counters().await
    }
}
