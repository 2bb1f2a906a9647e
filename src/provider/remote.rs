//! Remote Provider
//!
//! [`AnimeProvider`] backed by an extraction service reachable over HTTP.
//! Each operation maps to one GET request: the operation name is the path
//! and its arguments travel as query parameters.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use super::{AnimeProvider, ProviderError, ProviderResult, StreamingServer};

/// HTTP client for the upstream extraction service.
#[derive(Debug, Clone)]
pub struct RemoteProvider {
    client: Client,
    base_url: String,
}

impl RemoteProvider {
    /// Creates a client rooted at `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("anitaku_api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL every operation is resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, operation: &str, params: &[(&str, String)]) -> ProviderResult<Value> {
        let url = format!("{}/{}", self.base_url, operation);
        debug!(url = %url, "Calling provider");

        let response = self.client.get(&url).query(params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return serde_json::from_str(&body).map_err(|e| {
                warn!(url = %url, error = %e, "Provider returned a non-JSON body");
                ProviderError::Decode(e.to_string())
            });
        }

        let message = error_message(&body, status);
        if status == StatusCode::NOT_FOUND {
            Err(ProviderError::NotFound(message))
        } else {
            warn!(url = %url, status = %status, error = %message, "Provider request failed");
            Err(ProviderError::Upstream {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Pulls a human-readable message out of an error body.
///
/// Prefers a JSON `message` field, then the raw text, then the status reason.
fn error_message(body: &str, status: StatusCode) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::String(message)) = map.get("message") {
            return message.clone();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

#[async_trait]
impl AnimeProvider for RemoteProvider {
    async fn search(&self, query: &str, page: u32) -> ProviderResult<Value> {
        self.get(
            "search",
            &[("query", query.to_string()), ("page", page.to_string())],
        )
        .await
    }

    async fn fetch_anime_info(&self, id: &str) -> ProviderResult<Value> {
        self.get("info", &[("id", id.to_string())]).await
    }

    async fn fetch_genre_info(&self, genre: &str, page: u32) -> ProviderResult<Value> {
        self.get(
            "genre",
            &[("genre", genre.to_string()), ("page", page.to_string())],
        )
        .await
    }

    async fn fetch_genre_list(&self) -> ProviderResult<Value> {
        self.get("genre-list", &[]).await
    }

    async fn fetch_episode_sources(
        &self,
        episode_id: &str,
        server: Option<StreamingServer>,
    ) -> ProviderResult<Value> {
        let mut params = vec![("episodeId", episode_id.to_string())];
        if let Some(server) = server {
            params.push(("server", server.as_str().to_string()));
        }
        self.get("sources", &params).await
    }

    async fn fetch_episode_servers(&self, episode_id: &str) -> ProviderResult<Value> {
        self.get("servers", &[("episodeId", episode_id.to_string())])
            .await
    }

    async fn fetch_top_airing(&self, page: u32) -> ProviderResult<Value> {
        self.get("top-airing", &[("page", page.to_string())]).await
    }

    async fn fetch_recent_movies(&self, page: u32) -> ProviderResult<Value> {
        self.get("movies", &[("page", page.to_string())]).await
    }

    async fn fetch_popular(&self, page: u32) -> ProviderResult<Value> {
        self.get("popular", &[("page", page.to_string())]).await
    }

    async fn fetch_recent_episodes(&self, page: u32, kind: u32) -> ProviderResult<Value> {
        self.get(
            "recent-episodes",
            &[("page", page.to_string()), ("type", kind.to_string())],
        )
        .await
    }

    async fn fetch_anime_list(&self, page: u32) -> ProviderResult<Value> {
        self.get("anime-list", &[("page", page.to_string())]).await
    }

    async fn fetch_direct_download_link(
        &self,
        link: &str,
        captcha_token: &str,
    ) -> ProviderResult<Value> {
        let mut params = vec![("link", link.to_string())];
        if !captcha_token.is_empty() {
            params.push(("token", captcha_token.to_string()));
        }
        self.get("download", &params).await
    }
}
