//! Listings Module
//!
//! Cache-aside access to the full property collection: the read-through
//! accessor, the invalidation hook fired by mutations, hit/miss metrics, and
//! the search and pagination applied to what the accessor returns.

mod accessor;
mod invalidation;
mod metrics;
mod query;

use std::time::Duration;

pub use accessor::ListingCache;
pub use invalidation::{InvalidationHook, MutationKind};
pub use metrics::{MetricsCollector, MetricsSnapshot};
pub use query::{paginate, search, Page};

/// Cache key holding the serialized snapshot of every property.
pub const LISTINGS_KEY: &str = "all_properties";

/// How long a cached snapshot may be served before it expires on its own.
pub const DEFAULT_LISTING_TTL: Duration = Duration::from_secs(3600);

/// Properties shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;
