//! Listing Accessor Module
//!
//! Read-through accessor for the full listing collection.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::cache::CacheBackend;
use crate::error::{CacheResult, StoreResult};
use crate::listings::{DEFAULT_LISTING_TTL, LISTINGS_KEY};
use crate::models::Property;
use crate::store::RecordStore;

// == Listing Cache ==
/// Cache-aside accessor for the listing snapshot.
///
/// Reads try the cache first and fall back to the record store, writing the
/// fetched collection back under [`LISTINGS_KEY`]. Cache failures only ever
/// turn a read into a miss; store failures propagate.
///
/// Concurrent misses are not merged: each one queries the store and
/// repopulates the cache, last writer wins. An invalidation racing with an
/// in-flight populate can therefore be overwritten by the older snapshot,
/// which then lives at most one TTL.
#[derive(Clone)]
pub struct ListingCache {
    cache: Arc<dyn CacheBackend>,
    store: Arc<dyn RecordStore>,
    ttl: Duration,
}

impl ListingCache {
    // == Constructor ==
    /// Creates an accessor over `cache` and `store` using the default
    /// one-hour snapshot TTL.
    pub fn new(cache: Arc<dyn CacheBackend>, store: Arc<dyn RecordStore>) -> Self {
        Self {
            cache,
            store,
            ttl: DEFAULT_LISTING_TTL,
        }
    }

    /// Overrides how long a populated snapshot lives.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    // == Get All Records ==
    /// Returns every property, newest first.
    pub async fn get_all_records(&self) -> StoreResult<Vec<Property>> {
        if let Some(records) = self.cached_records().await {
            debug!(count = records.len(), "Listing cache hit");
            return Ok(records);
        }

        debug!("Listing cache miss, querying record store");
        let records = self.store.fetch_all().await?;

        match serde_json::to_string(&records) {
            Ok(payload) => {
                if let Err(err) = self.cache.set(LISTINGS_KEY, payload, self.ttl).await {
                    warn!(error = %err, "Failed to populate listing cache");
                }
            }
            Err(err) => warn!(error = %err, "Failed to serialize listings for cache"),
        }

        Ok(records)
    }

    // == Invalidate ==
    /// Drops the cached snapshot so the next read goes to the store.
    ///
    /// Idempotent: invalidating an absent snapshot succeeds.
    pub async fn invalidate(&self) -> CacheResult<()> {
        self.cache.delete(LISTINGS_KEY).await?;
        debug!("Listing cache invalidated");
        Ok(())
    }

    /// Decoded snapshot, or `None` for anything that should count as a miss.
    async fn cached_records(&self) -> Option<Vec<Property>> {
        let payload = match self.cache.get(LISTINGS_KEY).await {
            Ok(payload) => payload?,
            Err(err) => {
                warn!(error = %err, "Listing cache unavailable, falling back to record store");
                return None;
            }
        };

        match serde_json::from_str(&payload) {
            Ok(records) => Some(records),
            Err(err) => {
                warn!(error = %err, "Discarding undecodable listing cache payload");
                None
            }
        }
    }
}
