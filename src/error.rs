//! Error types for the listings service
//!
//! One thiserror enum per layer: cache backend, record store, and the HTTP API
//! that maps both onto status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Failures reported by a cache backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Backend could not be reached or refused the call
    #[error("Cache unavailable: {0}")]
    Unavailable(String),
}

// == Store Error Enum ==
/// Failures reported by the record store.
///
/// A missing record is not an error; store lookups return `Option` for that.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Record store could not be reached or the call failed
    #[error("Record store unavailable: {0}")]
    Unavailable(String),
}

// == API Error Enum ==
/// Error type returned by HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Record store failure, the only fatal outcome for a read
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Cache failure surfaced by an explicit cache operation
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Requested property does not exist
    #[error("Property not found: {0}")]
    NotFound(u64),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Cache(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Aliases ==
/// Result of a cache backend call.
pub type CacheResult<T> = std::result::Result<T, CacheError>;

/// Result of a record store call.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Convenience Result type for HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
