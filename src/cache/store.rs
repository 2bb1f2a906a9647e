//! Memory Store Module
//!
//! Bounded in-process key/value map with per-entry TTL and LRU eviction.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::cache::{CacheEntry, LruTracker};

// == Memory Store ==
/// Synchronous storage behind [`crate::cache::MemoryCache`].
#[derive(Debug)]
pub struct MemoryStore {
    entries: HashMap<String, CacheEntry>,
    lru: LruTracker,
    max_entries: usize,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates a store holding at most `max_entries` live entries.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            max_entries,
        }
    }

    // == Set ==
    /// Stores `value` under `key` for `ttl`.
    ///
    /// Overwriting resets the TTL. Inserting a new key into a full store
    /// evicts the least recently used entry first.
    pub fn set(&mut self, key: String, value: String, ttl: Duration) {
        if self.max_entries == 0 {
            return;
        }

        let previous = self.entries.get(&key).map(|entry| entry.tick);
        if previous.is_none() && self.entries.len() >= self.max_entries {
            self.evict_one();
        }

        let mut entry = CacheEntry::new(value, ttl);
        entry.tick = self.lru.touch(&key, previous);
        self.entries.insert(key, entry);
    }

    // == Get ==
    /// Returns the live value under `key`.
    ///
    /// Expired entries are dropped on access and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let entry = self.entries.get_mut(key)?;

        if entry.is_expired() {
            let tick = entry.tick;
            self.entries.remove(key);
            self.lru.remove(tick);
            return None;
        }

        entry.tick = self.lru.touch(key, Some(entry.tick));
        Some(entry.value.clone())
    }

    // == Delete ==
    /// Removes `key`, returning whether it was present.
    pub fn delete(&mut self, key: &str) -> bool {
        match self.entries.remove(key) {
            Some(entry) => {
                self.lru.remove(entry.tick);
                true
            }
            None => false,
        }
    }

    // == Cleanup Expired ==
    /// Removes all expired entries, returning how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = Instant::now();
        let expired: Vec<(String, u64)> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, entry)| (key.clone(), entry.tick))
            .collect();

        for (key, tick) in &expired {
            self.entries.remove(key);
            self.lru.remove(*tick);
        }

        expired.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_one(&mut self) {
        if let Some(key) = self.lru.evict_oldest() {
            self.entries.remove(&key);
        }
    }
}
