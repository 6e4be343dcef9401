//! Property Listings - a listings backend with a cache-aside listing cache
//!
//! Reads of the full property collection go through a TTL cache; every
//! committed create, update or delete evicts it. Hit/miss metrics come from
//! the cache backend's own counters.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod listings;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
