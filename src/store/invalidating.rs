//! Invalidating Store Module
//!
//! Record store wrapper that invalidates the listing cache after each
//! committed mutation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::listings::{InvalidationHook, MutationKind};
use crate::models::{Property, PropertyFields};
use crate::store::RecordStore;

// == Invalidating Store ==
/// Persistence layer with an explicit reference to the invalidation hook.
///
/// Reads pass straight through. A mutation runs the hook only once the inner
/// store has committed it; failed mutations and mutations of missing records
/// leave the cache untouched.
#[derive(Clone)]
pub struct InvalidatingStore {
    inner: Arc<dyn RecordStore>,
    hook: InvalidationHook,
}

impl InvalidatingStore {
    /// Wraps `inner`, running `hook` after each committed mutation.
    pub fn new(inner: Arc<dyn RecordStore>, hook: InvalidationHook) -> Self {
        Self { inner, hook }
    }
}

// == RecordStore Implementation ==
#[async_trait]
impl RecordStore for InvalidatingStore {
    async fn fetch_all(&self) -> StoreResult<Vec<Property>> {
        self.inner.fetch_all().await
    }

    async fn fetch_one(&self, id: u64) -> StoreResult<Option<Property>> {
        self.inner.fetch_one(id).await
    }

    async fn create(&self, fields: PropertyFields) -> StoreResult<Property> {
        let property = self.inner.create(fields).await?;
        self.hook.on_mutation(&property, MutationKind::Created).await;
        Ok(property)
    }

    async fn update(&self, id: u64, fields: PropertyFields) -> StoreResult<Option<Property>> {
        let updated = self.inner.update(id, fields).await?;
        if let Some(property) = &updated {
            self.hook.on_mutation(property, MutationKind::Updated).await;
        }
        Ok(updated)
    }

    async fn delete(&self, id: u64) -> StoreResult<Option<Property>> {
        let removed = self.inner.delete(id).await?;
        if let Some(property) = &removed {
            self.hook.on_mutation(property, MutationKind::Deleted).await;
        }
        Ok(removed)
    }
}
