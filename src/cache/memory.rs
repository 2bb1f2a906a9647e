//! In-process cache client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{CacheClient, CacheResult, MemoryStore};

/// [`CacheClient`] over a shared [`MemoryStore`].
///
/// Clones share the same store.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<MemoryStore>>,
}

impl MemoryCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::new(max_entries))),
        }
    }

    /// Handle to the underlying store, for the background cleanup task.
    pub fn store(&self) -> Arc<RwLock<MemoryStore>> {
        Arc::clone(&self.store)
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}

#[async_trait]
impl CacheClient for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        // Write lock: a read refreshes LRU order and may drop an expired entry
        let value = self.store.write().await.get(key);
        if value.is_some() {
            debug!(key = key, "Cache HIT");
        } else {
            debug!(key = key, "Cache MISS");
        }
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        self.store
            .write()
            .await
            .set(key.to_string(), value.to_string(), ttl);
        debug!(key = key, ttl_seconds = ttl.as_secs(), "Cache SET");
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.store.write().await.delete(key);
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_delete() {
        let cache = MemoryCache::new(10);

        cache
            .set("anitaku:genre-list", "[]", Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(
            cache.get("anitaku:genre-list").await.unwrap().as_deref(),
            Some("[]")
        );

        cache.delete("anitaku:genre-list").await.unwrap();
        assert!(cache.get("anitaku:genre-list").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let cache = MemoryCache::new(10);
        let other = cache.clone();

        cache.set("k", "v", Duration::from_secs(60)).await.unwrap();

        assert_eq!(other.get("k").await.unwrap().as_deref(), Some("v"));
        assert_eq!(other.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let cache = MemoryCache::new(10);
        assert!(cache.delete("missing").await.is_ok());
        assert_eq!(cache.provider_name(), "memory");
    }
}
