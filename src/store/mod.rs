//! Record Store Module
//!
//! The record store contract the listing cache depends on, an in-memory
//! implementation, and the invalidating wrapper that ties mutations to the
//! listing cache.

mod invalidating;
mod memory;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Property, PropertyFields};

pub use invalidating::InvalidatingStore;
pub use memory::InMemoryRecordStore;

// == Record Store ==
/// Durable source of property records.
///
/// A missing record is reported as `None`, never as an error.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records, newest `created_at` first.
    async fn fetch_all(&self) -> StoreResult<Vec<Property>>;

    async fn fetch_one(&self, id: u64) -> StoreResult<Option<Property>>;

    /// Inserts a new record, assigning its id and creation time.
    async fn create(&self, fields: PropertyFields) -> StoreResult<Property>;

    /// Replaces the mutable fields of an existing record.
    async fn update(&self, id: u64, fields: PropertyFields) -> StoreResult<Option<Property>>;

    /// Removes a record, returning what was removed.
    async fn delete(&self, id: u64) -> StoreResult<Option<Property>>;
}
