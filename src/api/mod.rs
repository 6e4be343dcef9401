//! API Module
//!
//! HTTP handlers and routing for the listings REST API.
//!
//! # Endpoints
//! - `GET /properties` - List properties (search + pagination) via the listing cache
//! - `POST /properties` - Create a property
//! - `GET /properties/:id` - Fetch one property
//! - `PUT /properties/:id` - Update a property
//! - `DELETE /properties/:id` - Delete a property
//! - `GET /cache/metrics` - Cache hit/miss metrics
//! - `POST /cache/clear` - Drop the cached listing snapshot
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
