//! Provider Module
//!
//! The upstream content source, abstracted behind [`AnimeProvider`].
//! Payloads are passed through as opaque JSON.

mod remote;
mod servers;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use remote::RemoteProvider;
pub use servers::StreamingServer;

// == Provider Error ==
/// Failure reported by a provider operation.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The upstream has nothing for the requested resource
    #[error("{0}")]
    NotFound(String),

    /// The upstream answered with a non-success status
    #[error("upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },

    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Convenience Result type for provider operations.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

// == Anime Provider ==
/// Operations exposed by an anime content provider.
#[async_trait]
pub trait AnimeProvider: Send + Sync {
    async fn search(&self, query: &str, page: u32) -> ProviderResult<Value>;

    async fn fetch_anime_info(&self, id: &str) -> ProviderResult<Value>;

    async fn fetch_genre_info(&self, genre: &str, page: u32) -> ProviderResult<Value>;

    async fn fetch_genre_list(&self) -> ProviderResult<Value>;

    /// Extracts playable sources; `None` lets the provider pick its default server.
    async fn fetch_episode_sources(
        &self,
        episode_id: &str,
        server: Option<StreamingServer>,
    ) -> ProviderResult<Value>;

    async fn fetch_episode_servers(&self, episode_id: &str) -> ProviderResult<Value>;

    async fn fetch_top_airing(&self, page: u32) -> ProviderResult<Value>;

    async fn fetch_recent_movies(&self, page: u32) -> ProviderResult<Value>;

    async fn fetch_popular(&self, page: u32) -> ProviderResult<Value>;

    /// `kind` selects the upstream listing (sub, dub, chinese).
    async fn fetch_recent_episodes(&self, page: u32, kind: u32) -> ProviderResult<Value>;

    async fn fetch_anime_list(&self, page: u32) -> ProviderResult<Value>;

    /// Resolves a download page link into direct download links.
    async fn fetch_direct_download_link(
        &self,
        link: &str,
        captcha_token: &str,
    ) -> ProviderResult<Value>;
}
