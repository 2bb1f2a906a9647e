//! Read-through fetch helper.

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use super::CacheClient;

/// Returns the value cached under `key`, computing and storing it on a miss.
///
/// Only `Ok` results are stored. Backend failures and unreadable entries
/// are logged and treated as misses, so a broken cache degrades to calling
/// `compute` directly. Concurrent misses on one key may each compute.
pub async fn fetch<T, E, F, Fut>(
    client: &dyn CacheClient,
    key: &str,
    compute: F,
    ttl: Duration,
) -> Result<T, E>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    match client.get(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => return Ok(value),
            Err(e) => warn!(key = key, error = %e, "Discarding unreadable cache entry"),
        },
        Ok(None) => {}
        Err(e) => warn!(
            key = key,
            backend = client.provider_name(),
            error = %e,
            "Cache read failed"
        ),
    }

    let value = compute().await?;

    match serde_json::to_string(&value) {
        Ok(raw) => {
            if let Err(e) = client.set(key, &raw, ttl).await {
                warn!(
                    key = key,
                    backend = client.provider_name(),
                    error = %e,
                    "Cache write failed"
                );
            }
        }
        Err(e) => warn!(key = key, error = %e, "Value not cacheable"),
    }

    Ok(value)
}
