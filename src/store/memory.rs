//! Memory Store Module
//!
//! In-memory record store.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::cache::{Clock, SystemClock};
use crate::error::StoreResult;
use crate::models::{Property, PropertyFields};
use crate::store::RecordStore;

#[derive(Debug)]
struct StoreState {
    records: BTreeMap<u64, Property>,
    next_id: u64,
}

// == In-Memory Record Store ==
/// Record store kept in a `BTreeMap`, with ids assigned from 1 upwards.
///
/// Each operation holds the lock for its whole duration, giving single-row
/// atomicity for create, update and delete.
#[derive(Debug)]
pub struct InMemoryRecordStore {
    state: RwLock<StoreState>,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRecordStore {
    // == Constructors ==
    /// Creates an empty store stamping records with wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store stamping `created_at` from the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: RwLock::new(StoreState {
                records: BTreeMap::new(),
                next_id: 1,
            }),
            clock,
        }
    }

    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.clock.now_ms() as i64).unwrap_or_else(Utc::now)
    }
}

// == RecordStore Implementation ==
#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn fetch_all(&self) -> StoreResult<Vec<Property>> {
        let state = self.state.read().await;
        let mut records: Vec<Property> = state.records.values().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(records)
    }

    async fn fetch_one(&self, id: u64) -> StoreResult<Option<Property>> {
        Ok(self.state.read().await.records.get(&id).cloned())
    }

    async fn create(&self, fields: PropertyFields) -> StoreResult<Property> {
        let created_at = self.now();
        let mut state = self.state.write().await;

        let id = state.next_id;
        state.next_id += 1;

        let property = Property::from_fields(id, fields, created_at);
        state.records.insert(id, property.clone());
        Ok(property)
    }

    async fn update(&self, id: u64, fields: PropertyFields) -> StoreResult<Option<Property>> {
        let mut state = self.state.write().await;
        Ok(state.records.get_mut(&id).map(|property| {
            property.apply(fields);
            property.clone()
        }))
    }

    async fn delete(&self, id: u64) -> StoreResult<Option<Property>> {
        Ok(self.state.write().await.records.remove(&id))
    }
}
