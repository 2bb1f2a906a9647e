//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use tracing::warn;

/// Default provider endpoint when `ANITAKU_URL` is not set.
pub const DEFAULT_PROVIDER_URL: &str = "http://127.0.0.1:3001/anitaku";

/// Default Redis connection string when `REDIS_URL` is not set.
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

// == Cache Backend ==
/// Which cache client, if any, fronts the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheBackend {
    /// Every request goes straight to the provider
    #[default]
    None,
    /// In-process TTL store
    Memory,
    /// Shared Redis instance
    Redis,
}

impl FromStr for CacheBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" | "off" => Ok(Self::None),
            "memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            other => Err(format!("unknown cache backend '{}'", other)),
        }
    }
}

impl fmt::Display for CacheBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Memory => "memory",
            Self::Redis => "redis",
        };
        f.write_str(name)
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the provider client
    pub provider_url: String,
    /// Provider request timeout in seconds
    pub provider_timeout: u64,
    /// Token forwarded to the direct download operation
    pub recaptcha_token: String,
    /// Selected cache backend
    pub cache_backend: CacheBackend,
    /// Redis connection string, used when `cache_backend` is `Redis`
    pub redis_url: String,
    /// Base TTL in seconds for cached provider responses
    pub cache_ttl: u64,
    /// Maximum number of entries held by the memory backend
    pub max_entries: usize,
    /// Memory backend cleanup interval in seconds
    pub cleanup_interval: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `ANITAKU_URL` - Provider base URL (default: local extraction service)
    /// - `PROVIDER_TIMEOUT` - Provider timeout in seconds (default: 30)
    /// - `RECAPTCHATOKEN` - Download token (default: empty)
    /// - `CACHE_BACKEND` - `none`, `memory` or `redis` (default: none)
    /// - `REDIS_URL` - Redis connection string
    /// - `CACHE_TTL` - Base TTL in seconds (default: 3600)
    /// - `MAX_ENTRIES` - Memory backend capacity (default: 1000)
    /// - `CLEANUP_INTERVAL` - Memory backend sweep frequency in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let cache_backend = match env::var("CACHE_BACKEND") {
            Ok(raw) => raw.parse().unwrap_or_else(|err| {
                warn!("{}, caching disabled", err);
                CacheBackend::None
            }),
            Err(_) => defaults.cache_backend,
        };

        Self {
            provider_url: non_empty_var("ANITAKU_URL").unwrap_or(defaults.provider_url),
            provider_timeout: parsed_var("PROVIDER_TIMEOUT").unwrap_or(defaults.provider_timeout),
            recaptcha_token: env::var("RECAPTCHATOKEN").unwrap_or(defaults.recaptcha_token),
            cache_backend,
            redis_url: non_empty_var("REDIS_URL").unwrap_or(defaults.redis_url),
            cache_ttl: parsed_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            max_entries: parsed_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            cleanup_interval: parsed_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            server_port: parsed_var("SERVER_PORT").unwrap_or(defaults.server_port),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            provider_timeout: 30,
            recaptcha_token: String::new(),
            cache_backend: CacheBackend::None,
            redis_url: DEFAULT_REDIS_URL.to_string(),
            cache_ttl: 60 * 60,
            max_entries: 1000,
            cleanup_interval: 60,
            server_port: 3000,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parsed_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
