//! API Handlers
//!
//! One handler per provider operation. Each extracts its parameters,
//! derives the cache key, goes through the read-through cache when one is
//! configured and maps the provider outcome to a single response.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use super::extract::LenientQuery;
use crate::cache::{fetch, CacheClient, CacheKey, BASE_TTL};
use crate::error::{ApiError, Result};
use crate::models::{
    DiscoveryResponse, DownloadQuery, HealthResponse, PageQuery, RecentEpisodesQuery, WatchQuery,
};
use crate::provider::{AnimeProvider, ProviderResult};

/// Application state shared across all handlers.
///
/// The cache is optional; without one every request reaches the provider.
#[derive(Clone)]
pub struct AppState {
    /// Upstream content provider
    pub provider: Arc<dyn AnimeProvider>,
    /// Read-through cache, if configured
    pub cache: Option<Arc<dyn CacheClient>>,
    /// Token forwarded to the direct download operation
    pub captcha_token: Arc<str>,
    /// Lifetime of ordinary cache entries; long-lived keys scale it up
    pub base_ttl: Duration,
}

impl AppState {
    /// Creates uncached state around `provider`.
    pub fn new(provider: Arc<dyn AnimeProvider>) -> Self {
        Self {
            provider,
            cache: None,
            captcha_token: Arc::from(""),
            base_ttl: BASE_TTL,
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn CacheClient>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_captcha_token(mut self, token: impl Into<Arc<str>>) -> Self {
        self.captcha_token = token.into();
        self
    }

    pub fn with_base_ttl(mut self, ttl: Duration) -> Self {
        self.base_ttl = ttl;
        self
    }

    /// Runs `compute` through the cache under `key`, or directly when uncached.
    async fn cached<F, Fut>(&self, key: CacheKey<'_>, compute: F) -> ProviderResult<Value>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ProviderResult<Value>>,
    {
        match &self.cache {
            Some(cache) => {
                let ttl = key.ttl(self.base_ttl);
                fetch(cache.as_ref(), &key.to_string(), compute, ttl).await
            }
            None => compute().await,
        }
    }
}

/// Handler for GET /
///
/// Lists the routes this provider serves.
pub async fn discovery_handler() -> Json<DiscoveryResponse> {
    Json(DiscoveryResponse::anitaku())
}

/// Handler for GET /:query
pub async fn search_handler(
    State(state): State<AppState>,
    Path(query): Path<String>,
    LenientQuery(params): LenientQuery<PageQuery>,
) -> Result<Json<Value>> {
    let page = params.page();
    let key = CacheKey::Search {
        query: &query,
        page,
    };

    state
        .cached(key, || state.provider.search(&query, page))
        .await
        .map(Json)
        .map_err(ApiError::listing)
}

/// Handler for GET /info/:id
pub async fn info_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    state
        .cached(CacheKey::Info { id: &id }, || {
            state.provider.fetch_anime_info(&id)
        })
        .await
        .map(Json)
        .map_err(ApiError::lookup)
}

/// Handler for GET /genre/:genre
pub async fn genre_handler(
    State(state): State<AppState>,
    Path(genre): Path<String>,
    LenientQuery(params): LenientQuery<PageQuery>,
) -> Result<Json<Value>> {
    let page = params.page();
    let key = CacheKey::Genre {
        genre: &genre,
        page,
    };

    state
        .cached(key, || state.provider.fetch_genre_info(&genre, page))
        .await
        .map(Json)
        .map_err(ApiError::lookup)
}

/// Handler for GET /genre/list
pub async fn genre_list_handler(State(state): State<AppState>) -> Result<Json<Value>> {
    state
        .cached(CacheKey::GenreList, || state.provider.fetch_genre_list())
        .await
        .map(Json)
        .map_err(ApiError::lookup)
}

/// Handler for GET /watch/:episodeId
///
/// An unknown `server` is rejected before the cache or provider is touched.
pub async fn watch_handler(
    State(state): State<AppState>,
    Path(episode_id): Path<String>,
    LenientQuery(params): LenientQuery<WatchQuery>,
) -> Result<Json<Value>> {
    let server = params.server()?;
    let key = CacheKey::Watch {
        episode_id: &episode_id,
        server,
    };

    state
        .cached(key, || {
            state.provider.fetch_episode_sources(&episode_id, server)
        })
        .await
        .map(Json)
        .map_err(ApiError::lookup)
}

/// Handler for GET /servers/:episodeId
pub async fn servers_handler(
    State(state): State<AppState>,
    Path(episode_id): Path<String>,
) -> Result<Json<Value>> {
    let key = CacheKey::Servers {
        episode_id: &episode_id,
    };

    state
        .cached(key, || state.provider.fetch_episode_servers(&episode_id))
        .await
        .map(Json)
        .map_err(ApiError::lookup)
}

/// Handler for GET /top-airing
pub async fn top_airing_handler(
    State(state): State<AppState>,
    LenientQuery(params): LenientQuery<PageQuery>,
) -> Result<Json<Value>> {
    let page = params.page();
    state
        .cached(CacheKey::TopAiring { page }, || {
            state.provider.fetch_top_airing(page)
        })
        .await
        .map(Json)
        .map_err(ApiError::listing)
}

/// Handler for GET /movies
pub async fn movies_handler(
    State(state): State<AppState>,
    LenientQuery(params): LenientQuery<PageQuery>,
) -> Result<Json<Value>> {
    let page = params.page();
    state
        .cached(CacheKey::Movies { page }, || {
            state.provider.fetch_recent_movies(page)
        })
        .await
        .map(Json)
        .map_err(ApiError::listing)
}

/// Handler for GET /popular
pub async fn popular_handler(
    State(state): State<AppState>,
    LenientQuery(params): LenientQuery<PageQuery>,
) -> Result<Json<Value>> {
    let page = params.page();
    state
        .cached(CacheKey::Popular { page }, || state.provider.fetch_popular(page))
        .await
        .map(Json)
        .map_err(ApiError::listing)
}

/// Handler for GET /recent-episodes
pub async fn recent_episodes_handler(
    State(state): State<AppState>,
    LenientQuery(params): LenientQuery<RecentEpisodesQuery>,
) -> Result<Json<Value>> {
    let page = params.page();
    let kind = params.kind();

    state
        .cached(CacheKey::RecentEpisodes { page, kind }, || {
            state.provider.fetch_recent_episodes(page, kind)
        })
        .await
        .map(Json)
        .map_err(ApiError::listing)
}

/// Handler for GET /anime-list
pub async fn anime_list_handler(
    State(state): State<AppState>,
    LenientQuery(params): LenientQuery<PageQuery>,
) -> Result<Json<Value>> {
    let page = params.page();
    state
        .cached(CacheKey::AnimeList { page }, || {
            state.provider.fetch_anime_list(page)
        })
        .await
        .map(Json)
        .map_err(ApiError::listing)
}

/// Handler for GET /download
///
/// Requires `?link=`; a missing link is rejected before any cache lookup.
pub async fn download_handler(
    State(state): State<AppState>,
    LenientQuery(params): LenientQuery<DownloadQuery>,
) -> Result<Json<Value>> {
    let link = params.link()?;

    state
        .cached(CacheKey::Download { link }, || {
            state
                .provider
                .fetch_direct_download_link(link, &state.captcha_token)
        })
        .await
        .map(Json)
        .map_err(ApiError::lookup)
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache = state
        .cache
        .as_ref()
        .map_or("none", |cache| cache.provider_name());
    Json(HealthResponse::healthy(cache))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::MockProvider;
    use crate::cache::MemoryCache;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde_json::json;

    fn uncached(provider: &Arc<MockProvider>) -> AppState {
        AppState::new(provider.clone())
    }

    fn cached(provider: &Arc<MockProvider>) -> AppState {
        AppState::new(provider.clone()).with_cache(Arc::new(MemoryCache::new(100)))
    }

    #[tokio::test]
    async fn test_search_passes_query_and_page() {
        let provider = Arc::new(MockProvider::new());
        let state = uncached(&provider);

        let params = PageQuery {
            page: Some("3".into()),
        };
        let Json(body) = search_handler(State(state), Path("naruto".into()), LenientQuery(params))
            .await
            .unwrap();

        assert_eq!(body["operation"], "search");
        assert_eq!(provider.calls(), vec!["search:naruto:3"]);
    }

    #[tokio::test]
    async fn test_info_cached_once() {
        let provider = Arc::new(MockProvider::new());
        let state = cached(&provider);

        for _ in 0..3 {
            info_handler(State(state.clone()), Path("one-piece".into()))
                .await
                .unwrap();
        }

        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_entries_expire_after_base_ttl() {
        let provider = Arc::new(MockProvider::new());
        let state = cached(&provider).with_base_ttl(Duration::from_millis(50));

        info_handler(State(state.clone()), Path("one-piece".into()))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(80)).await;
        info_handler(State(state), Path("one-piece".into()))
            .await
            .unwrap();

        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_uncached_calls_provider_every_time() {
        let provider = Arc::new(MockProvider::new());
        let state = uncached(&provider);

        for _ in 0..3 {
            info_handler(State(state.clone()), Path("one-piece".into()))
                .await
                .unwrap();
        }

        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test]
    async fn test_info_failure_is_not_found() {
        let provider = Arc::new(MockProvider::failing());
        let state = cached(&provider);

        let err = info_handler(State(state), Path("missing".into()))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_top_airing_failure_is_internal() {
        let provider = Arc::new(MockProvider::failing());
        let state = uncached(&provider);

        let err = top_airing_handler(State(state), LenientQuery(PageQuery::default()))
            .await
            .unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_watch_invalid_server_skips_provider() {
        let provider = Arc::new(MockProvider::new());
        let state = cached(&provider);

        let params = WatchQuery {
            server: Some("invalid-value".into()),
        };
        let err = watch_handler(State(state), Path("ep-1".into()), LenientQuery(params))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::InvalidServer));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_download_forwards_token() {
        let provider = Arc::new(MockProvider::new());
        let state = cached(&provider).with_captcha_token("tok");

        let params = DownloadQuery {
            link: Some("https://example.com/dl".into()),
        };
        download_handler(State(state), LenientQuery(params)).await.unwrap();

        assert_eq!(provider.calls(), vec!["download:https://example.com/dl:tok"]);
    }

    #[tokio::test]
    async fn test_recent_episodes_defaults() {
        let provider = Arc::new(MockProvider::new());
        let state = uncached(&provider);

        recent_episodes_handler(State(state), LenientQuery(RecentEpisodesQuery::default()))
            .await
            .unwrap();

        assert_eq!(provider.calls(), vec!["recent-episodes:1:1"]);
    }

    #[tokio::test]
    async fn test_health_reports_cache_backend() {
        let provider = Arc::new(MockProvider::new());

        let Json(body) = health_handler(State(uncached(&provider))).await;
        assert_eq!(body.cache, "none");

        let Json(body) = health_handler(State(cached(&provider))).await;
        assert_eq!(body.cache, "memory");
        assert_eq!(body.status, "healthy");
    }

    #[tokio::test]
    async fn test_discovery_handler() {
        let Json(body) = discovery_handler().await;
        assert_eq!(
            serde_json::to_value(&body).unwrap()["routes"][5],
            json!("/genre/list")
        );
    }
}
