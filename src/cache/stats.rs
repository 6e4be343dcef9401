//! Cache Counters Module
//!
//! Cumulative lookup counters maintained by a cache backend.

use serde::Serialize;

// == Cache Counters ==
/// Process-lifetime lookup counters, analogous to Redis `keyspace_hits` /
/// `keyspace_misses`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheCounters {
    /// Number of lookups that found a live entry
    pub hits: u64,
    /// Number of lookups that found nothing (absent or expired)
    pub misses: u64,
    /// Current number of stored entries, expired-but-unpurged included
    pub entries: usize,
}

impl CacheCounters {
    // == Constructor ==
    /// Creates counters with everything at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Update Entry Count ==
    /// Updates the stored entries gauge.
    pub fn set_entries(&mut self, count: usize) {
        self.entries = count;
    }

    /// Total number of lookups seen.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_new() {
        let counters = CacheCounters::new();
        assert_eq!(counters.hits, 0);
        assert_eq!(counters.misses, 0);
        assert_eq!(counters.entries, 0);
        assert_eq!(counters.lookups(), 0);
    }

    #[test]
    fn test_record_hits_and_misses() {
        let mut counters = CacheCounters::new();
        counters.record_hit();
        counters.record_hit();
        counters.record_miss();

        assert_eq!(counters.hits, 2);
        assert_eq!(counters.misses, 1);
        assert_eq!(counters.lookups(), 3);
    }

    #[test]
    fn test_set_entries() {
        let mut counters = CacheCounters::new();
        counters.set_entries(42);
        assert_eq!(counters.entries, 42);
    }
}
