//! Metrics Module
//!
//! Cache hit/miss metrics.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};

use crate::cache::{CacheBackend, CacheCounters};

// == Metrics Snapshot ==
/// Point-in-time view of the backend's lookup counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub total: u64,
    /// Hits as a percentage of all lookups, rounded to two decimals
    pub hit_ratio: f64,
    /// Set when the counters could not be read; all numbers are then zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MetricsSnapshot {
    pub fn from_counters(counters: CacheCounters) -> Self {
        let total = counters.lookups();
        let hit_ratio = if total > 0 {
            round2(counters.hits as f64 / total as f64 * 100.0)
        } else {
            0.0
        };

        Self {
            hits: counters.hits,
            misses: counters.misses,
            total,
            hit_ratio,
            error: None,
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            hits: 0,
            misses: 0,
            total: 0,
            hit_ratio: 0.0,
            error: Some(reason.into()),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// == Metrics Collector ==
/// Reads lookup counters from the cache backend.
///
/// Runs independently of the read and write paths.
#[derive(Clone)]
pub struct MetricsCollector {
    cache: Arc<dyn CacheBackend>,
}

impl MetricsCollector {
    /// Creates a collector reading from `cache`.
    pub fn new(cache: Arc<dyn CacheBackend>) -> Self {
        Self { cache }
    }

    /// Never fails: unreadable counters yield a zeroed snapshot carrying the error.
    pub async fn collect(&self) -> MetricsSnapshot {
        match self.cache.counters().await {
            Ok(counters) => {
                let snapshot = MetricsSnapshot::from_counters(counters);
                info!(
                    hits = snapshot.hits,
                    misses = snapshot.misses,
                    hit_ratio = snapshot.hit_ratio,
                    total = snapshot.total,
                    "Cache metrics collected"
                );
                snapshot
            }
            Err(err) => {
                error!(error = %err, "Error retrieving cache metrics");
                MetricsSnapshot::unavailable(err.to_string())
            }
        }
    }
}
