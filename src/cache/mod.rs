//! Cache Module
//!
//! Read-through caching of provider responses. Handlers go through
//! [`fetch`], which talks to whichever [`CacheClient`] was injected at
//! startup: a shared Redis instance or the in-process [`MemoryCache`].

mod entry;
mod fetch;
mod keys;
mod lru;
mod memory;
mod redis;
mod store;


use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use entry::CacheEntry;
pub use fetch::fetch;
pub use keys::{CacheKey, KEY_PREFIX};
pub use lru::LruTracker;
pub use memory::MemoryCache;
pub use self::redis::RedisCache;
pub use store::MemoryStore;

// == Public Constants ==
/// Base time-to-live for cached provider responses.
pub const BASE_TTL: Duration = Duration::from_secs(60 * 60);

/// Multiplier applied to the base TTL for slow-changing listings.
pub const LONG_TTL_FACTOR: u32 = 24;

// == Cache Error ==
/// Errors raised by a cache backend.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Could not reach the backend
    #[error("cache connection error: {0}")]
    Connection(String),

    /// The backend rejected or failed a command
    #[error("cache backend error: {0}")]
    Backend(String),

    /// A stored value could not be (de)serialized
    #[error("cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience Result type for cache operations.
pub type CacheResult<T> = std::result::Result<T, CacheError>;

// == Cache Client ==
/// A key/value store with per-key expiry.
#[async_trait]
pub trait CacheClient: Send + Sync {
    /// Returns the stored value, or `None` when absent or expired.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value and expiry.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;

    /// Removes `key`. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> CacheResult<()>;

    /// Short backend name for logs and health output.
    fn provider_name(&self) -> &'static str;
}
