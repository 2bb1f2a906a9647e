//! Cache Entry Module
//!
//! A single stored value with its absolute expiry.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored payload plus the bookkeeping the memory store needs.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Serialized payload
    pub value: String,
    /// Instant after which the entry is dead
    pub expires_at: Instant,
    /// Position in the LRU order, assigned by the store
    pub(crate) tick: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry that expires `ttl` from now.
    pub fn new(value: String, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            value,
            expires_at: now.checked_add(ttl).unwrap_or(now),
            tick: 0,
        }
    }

    // == Is Expired ==
    /// An entry is expired once the current time reaches its expiry.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
