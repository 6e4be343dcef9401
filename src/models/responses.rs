//! Response DTOs for the listings API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::listings::Page;
use crate::models::{Price, Property};

/// A property as rendered by the API.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyResponse {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Decimal string, e.g. `"100000.00"`
    pub price: Price,
    /// Display form, e.g. `"$100,000.00"`
    pub formatted_price: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

impl From<Property> for PropertyResponse {
    fn from(property: Property) -> Self {
        Self {
            formatted_price: property.price.formatted(),
            id: property.id,
            title: property.title,
            description: property.description,
            price: property.price,
            location: property.location,
            created_at: property.created_at,
        }
    }
}

/// Page navigation metadata.
#[derive(Debug, Clone, Serialize)]
pub struct PaginationInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub total_count: usize,
}

/// Response body for `GET /properties`
#[derive(Debug, Clone, Serialize)]
pub struct PropertyListResponse {
    pub properties: Vec<PropertyResponse>,
    pub pagination: PaginationInfo,
    pub search_query: String,
}

impl PropertyListResponse {
    pub fn new(page: Page<Property>, search_query: impl Into<String>) -> Self {
        let pagination = PaginationInfo {
            current_page: page.current_page,
            total_pages: page.total_pages,
            has_previous: page.has_previous,
            has_next: page.has_next,
            total_count: page.total_count,
        };
        Self {
            properties: page.items.into_iter().map(PropertyResponse::from).collect(),
            pagination,
            search_query: search_query.into(),
        }
    }
}

/// Response body for single-property endpoints
#[derive(Debug, Clone, Serialize)]
pub struct PropertyDetailResponse {
    pub property: PropertyResponse,
}

impl From<Property> for PropertyDetailResponse {
    fn from(property: Property) -> Self {
        Self {
            property: property.into(),
        }
    }
}

/// Response body for `POST /cache/clear`
#[derive(Debug, Clone, Serialize)]
pub struct ClearCacheResponse {
    pub message: String,
}

impl ClearCacheResponse {
    pub fn cleared() -> Self {
        Self {
            message: "Cache cleared successfully".to_string(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
