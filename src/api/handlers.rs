//! API Handlers
//!
//! HTTP request handlers for each listings endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::cache::CacheBackend;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::listings::{
    paginate, search, InvalidationHook, ListingCache, MetricsCollector, MetricsSnapshot,
};
use crate::models::{
    ClearCacheResponse, HealthResponse, ListingQuery, PropertyDetailResponse,
    PropertyListResponse, PropertyPayload,
};
use crate::store::{InvalidatingStore, RecordStore};

/// Application state shared across all handlers.
///
/// Mutations go through `store`, which invalidates the listing cache after
/// each commit; listing reads go through `listings`.
#[derive(Clone)]
pub struct AppState {
    pub listings: ListingCache,
    pub store: Arc<dyn RecordStore>,
    pub metrics: MetricsCollector,
    pub page_size: usize,
}

impl AppState {
    /// Wires the listing cache, invalidation hook and metrics collector
    /// around a cache backend and a record store.
    pub fn new(cache: Arc<dyn CacheBackend>, records: Arc<dyn RecordStore>, config: &Config) -> Self {
        let hook = InvalidationHook::new(cache.clone());
        let store: Arc<dyn RecordStore> = Arc::new(InvalidatingStore::new(records, hook));

        Self {
            listings: ListingCache::new(cache.clone(), store.clone()).with_ttl(config.listing_ttl()),
            store,
            metrics: MetricsCollector::new(cache),
            page_size: config.page_size,
        }
    }
}

/// Handler for GET /properties
///
/// Lists properties from the listing cache, filtered by `search` and
/// paginated by `page`.
pub async fn list_properties_handler(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<PropertyListResponse>> {
    let records = state.listings.get_all_records().await?;

    let search_query = query.search.unwrap_or_default();
    let matching = search(records, Some(search_query.as_str()));
    let page = paginate(matching, query.page.as_deref(), state.page_size);

    Ok(Json(PropertyListResponse::new(page, search_query)))
}

/// Handler for GET /properties/:id
pub async fn get_property_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<PropertyDetailResponse>> {
    let property = state
        .store
        .fetch_one(id)
        .await?
        .ok_or(ApiError::NotFound(id))?;

    Ok(Json(property.into()))
}

/// Handler for POST /properties
pub async fn create_property_handler(
    State(state): State<AppState>,
    Json(payload): Json<PropertyPayload>,
) -> Result<(StatusCode, Json<PropertyDetailResponse>)> {
    let fields = payload.into_fields().map_err(ApiError::InvalidRequest)?;
    let property = state.store.create(fields).await?;

    Ok((StatusCode::CREATED, Json(property.into())))
}

/// Handler for PUT /properties/:id
pub async fn update_property_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<PropertyPayload>,
) -> Result<Json<PropertyDetailResponse>> {
    let fields = payload.into_fields().map_err(ApiError::InvalidRequest)?;
    let property = state
        .store
        .update(id, fields)
        .await?
        .ok_or(ApiError::NotFound(id))?;

    Ok(Json(property.into()))
}

/// Handler for DELETE /properties/:id
pub async fn delete_property_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    state
        .store
        .delete(id)
        .await?
        .ok_or(ApiError::NotFound(id))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /cache/metrics
///
/// Always 200: an unreadable backend is reported inside the snapshot.
pub async fn cache_metrics_handler(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.collect().await)
}

/// Handler for POST /cache/clear
pub async fn clear_cache_handler(State(state): State<AppState>) -> Result<Json<ClearCacheResponse>> {
    state.listings.invalidate().await?;
    Ok(Json(ClearCacheResponse::cleared()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
