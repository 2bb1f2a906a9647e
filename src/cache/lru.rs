//! LRU Tracker Module
//!
//! Orders keys by last access so the memory store can evict the coldest one.

use std::collections::BTreeMap;

// == LRU Tracker ==
/// Access order keyed by a monotonically increasing tick.
///
/// The smallest tick is the least recently used key. Callers keep each
/// key's current tick and hand it back on `touch`/`remove`.
#[derive(Debug, Default)]
pub struct LruTracker {
    order: BTreeMap<u64, String>,
    next_tick: u64,
}

impl LruTracker {
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks `key` as most recently used and returns its new tick.
    ///
    /// `previous` is the tick returned by the last touch of this key, if any.
    pub fn touch(&mut self, key: &str, previous: Option<u64>) -> u64 {
        if let Some(tick) = previous {
            self.order.remove(&tick);
        }
        self.next_tick += 1;
        self.order.insert(self.next_tick, key.to_string());
        self.next_tick
    }

    // == Remove ==
    pub fn remove(&mut self, tick: u64) {
        self.order.remove(&tick);
    }

    // == Evict Oldest ==
    /// Removes and returns the least recently used key.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_first().map(|(_, key)| key)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.order.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
