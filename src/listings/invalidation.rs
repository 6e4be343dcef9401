//! Invalidation Module
//!
//! Hook run after every committed mutation.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use crate::cache::CacheBackend;
use crate::listings::LISTINGS_KEY;
use crate::models::Property;

// == Mutation Kind ==
/// Kind of committed change to a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Created,
    Updated,
    Deleted,
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MutationKind::Created => "created",
            MutationKind::Updated => "updated",
            MutationKind::Deleted => "deleted",
        };
        f.write_str(name)
    }
}

// == Invalidation Hook ==
/// Evicts the cached listing snapshot whenever a property changes.
///
/// The whole snapshot is dropped regardless of which record changed. A failed
/// eviction is logged and swallowed: the mutation has already committed and
/// the stale snapshot still expires with its TTL.
#[derive(Clone)]
pub struct InvalidationHook {
    cache: Arc<dyn CacheBackend>,
}

impl InvalidationHook {
    /// Creates a hook evicting [`LISTINGS_KEY`] from `cache`.
    pub fn new(cache: Arc<dyn CacheBackend>) -> Self {
        Self { cache }
    }

    /// Evicts the snapshot after `property` was committed as `kind`.
    pub async fn on_mutation(&self, property: &Property, kind: MutationKind) {
        match self.cache.delete(LISTINGS_KEY).await {
            Ok(()) => info!(
                property_id = property.id,
                title = %property.title,
                action = %kind,
                "Property {}, listing cache invalidated",
                kind
            ),
            Err(err) => warn!(
                property_id = property.id,
                action = %kind,
                error = %err,
                "Failed to invalidate listing cache, serving stale data until TTL expiry"
            ),
        }
    }
}
