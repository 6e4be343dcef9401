//! Domain records and the request/response DTOs of the HTTP API.

pub mod property;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use property::{Price, PriceParseError, Property, PropertyFields};
pub use requests::{ListingQuery, PropertyPayload};
pub use responses::{
    ClearCacheResponse, ErrorResponse, HealthResponse, PaginationInfo, PropertyDetailResponse,
    PropertyListResponse, PropertyResponse,
};
