//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::listings::{DEFAULT_LISTING_TTL, DEFAULT_PAGE_SIZE};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Lifetime in seconds of the cached listing snapshot
    pub listing_ttl: u64,
    /// Properties per page on the listing endpoint
    pub page_size: usize,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `LISTING_CACHE_TTL` - Listing snapshot TTL in seconds (default: 3600)
    /// - `PAGE_SIZE` - Properties per page (default: 10)
    /// - `CLEANUP_INTERVAL` - Expired entry purge frequency in seconds (default: 60)
    ///
    /// Unparseable or zero values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            listing_ttl: env_or("LISTING_CACHE_TTL", defaults.listing_ttl),
            page_size: env_or("PAGE_SIZE", defaults.page_size),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }

    pub fn listing_ttl(&self) -> Duration {
        Duration::from_secs(self.listing_ttl)
    }
}

fn env_or<T>(name: &str, default: T) -> T
where
    T: FromStr + PartialEq + Default,
{
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .filter(|v| *v != T::default())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            listing_ttl: DEFAULT_LISTING_TTL.as_secs(),
            page_size: DEFAULT_PAGE_SIZE,
            cleanup_interval: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.listing_ttl, 3600);
        assert_eq!(config.listing_ttl(), Duration::from_secs(3600));
        assert_eq!(config.page_size, 10);
        assert_eq!(config.cleanup_interval, 60);
    }

    #[test]
    fn test_config_from_env() {
        // One test touches the environment so parallel tests cannot race on it
        env::remove_var("SERVER_PORT");
        env::set_var("LISTING_CACHE_TTL", "120");
        env::set_var("PAGE_SIZE", "0");
        env::set_var("CLEANUP_INTERVAL", "not-a-number");

        let config = Config::from_env();
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.listing_ttl, 120);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.cleanup_interval, 60);

        env::remove_var("LISTING_CACHE_TTL");
        env::remove_var("PAGE_SIZE");
        env::remove_var("CLEANUP_INTERVAL");
    }
}
