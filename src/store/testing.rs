//! Record store fakes for unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::{Barrier, Notify};

use crate::error::{StoreError, StoreResult};
use crate::models::{Property, PropertyFields};
use crate::store::{InMemoryRecordStore, RecordStore};

/// Wraps an `InMemoryRecordStore`, counting `fetch_all` calls and optionally
/// failing every call.
#[derive(Debug, Default)]
pub struct InstrumentedStore {
    pub inner: InMemoryRecordStore,
    fetch_all_calls: AtomicUsize,
    down: AtomicBool,
}

impl InstrumentedStore {
    pub fn fetch_all_calls(&self) -> usize {
        self.fetch_all_calls.load(Ordering::SeqCst)
    }

    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    fn check(&self) -> StoreResult<()> {
        if self.down.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("database is down".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for InstrumentedStore {
    async fn fetch_all(&self) -> StoreResult<Vec<Property>> {
        self.fetch_all_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.fetch_all().await
    }

    async fn fetch_one(&self, id: u64) -> StoreResult<Option<Property>> {
        self.check()?;
        self.inner.fetch_one(id).await
    }

    async fn create(&self, fields: PropertyFields) -> StoreResult<Property> {
        self.check()?;
        self.inner.create(fields).await
    }

    async fn update(&self, id: u64, fields: PropertyFields) -> StoreResult<Option<Property>> {
        self.check()?;
        self.inner.update(id, fields).await
    }

    async fn delete(&self, id: u64) -> StoreResult<Option<Property>> {
        self.check()?;
        self.inner.delete(id).await
    }
}

/// Record store whose `fetch_all` can be held mid-flight, for exercising
/// interleavings between concurrent reads and invalidations.
#[derive(Debug, Default)]
pub struct GatedStore {
    pub inner: InstrumentedStore,
    barrier: Option<Barrier>,
    pause_next: AtomicBool,
    fetched: Notify,
    released: Notify,
}

impl GatedStore {
    /// Every `fetch_all` waits until `parties` of them are in flight.
    pub fn with_barrier(parties: usize) -> Self {
        Self {
            barrier: Some(Barrier::new(parties)),
            ..Self::default()
        }
    }

    /// The next `fetch_all` reads its records, then blocks until [`release`](Self::release).
    pub fn pausing_next_fetch() -> Self {
        Self {
            pause_next: AtomicBool::new(true),
            ..Self::default()
        }
    }

    pub fn fetch_all_calls(&self) -> usize {
        self.inner.fetch_all_calls()
    }

    /// Resolves once the paused `fetch_all` holds its records.
    pub async fn wait_until_fetched(&self) {
        self.fetched.notified().await;
    }

    pub fn release(&self) {
        self.released.notify_one();
    }
}

#[async_trait]
impl RecordStore for GatedStore {
    async fn fetch_all(&self) -> StoreResult<Vec<Property>> {
        let records = self.inner.fetch_all().await?;

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        if self.pause_next.swap(false, Ordering::SeqCst) {
            self.fetched.notify_one();
            self.released.notified().await;
        }
        Ok(records)
    }

    async fn fetch_one(&self, id: u64) -> StoreResult<Option<Property>> {
        self.inner.fetch_one(id).await
    }

    async fn create(&self, fields: PropertyFields) -> StoreResult<Property> {
        self.inner.create(fields).await
    }

    async fn update(&self, id: u64, fields: PropertyFields) -> StoreResult<Option<Property>> {
        self.inner.update(id, fields).await
    }

    async fn delete(&self, id: u64) -> StoreResult<Option<Property>> {
        self.inner.delete(id).await
    }
}
