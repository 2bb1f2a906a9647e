//! Recording provider for handler and router tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::provider::{AnimeProvider, ProviderError, ProviderResult, StreamingServer};

/// Records each call as `operation:arg:arg` and answers with
/// `{"operation": ...}`, or fails every call when built with `failing()`.
#[derive(Debug, Default)]
pub struct MockProvider {
    calls: Mutex<Vec<String>>,
    fail: bool,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, operation: &str, args: &[&str]) -> ProviderResult<Value> {
        let mut call = operation.to_string();
        for arg in args {
            call.push(':');
            call.push_str(arg);
        }
        self.calls.lock().unwrap().push(call);

        if self.fail {
            Err(ProviderError::NotFound(format!("{} failed", operation)))
        } else {
            Ok(json!({ "operation": operation }))
        }
    }
}

#[async_trait]
impl AnimeProvider for MockProvider {
    async fn search(&self, query: &str, page: u32) -> ProviderResult<Value> {
        self.record("search", &[query, &page.to_string()])
    }

    async fn fetch_anime_info(&self, id: &str) -> ProviderResult<Value> {
        self.record("info", &[id])
    }

    async fn fetch_genre_info(&self, genre: &str, page: u32) -> ProviderResult<Value> {
        self.record("genre", &[genre, &page.to_string()])
    }

    async fn fetch_genre_list(&self) -> ProviderResult<Value> {
        self.record("genre-list", &[])
    }

    async fn fetch_episode_sources(
        &self,
        episode_id: &str,
        server: Option<StreamingServer>,
    ) -> ProviderResult<Value> {
        let server = server.map_or("default", |s| s.as_str());
        self.record("watch", &[episode_id, server])
    }

    async fn fetch_episode_servers(&self, episode_id: &str) -> ProviderResult<Value> {
        self.record("servers", &[episode_id])
    }

    async fn fetch_top_airing(&self, page: u32) -> ProviderResult<Value> {
        self.record("top-airing", &[&page.to_string()])
    }

    async fn fetch_recent_movies(&self, page: u32) -> ProviderResult<Value> {
        self.record("movies", &[&page.to_string()])
    }

    async fn fetch_popular(&self, page: u32) -> ProviderResult<Value> {
        self.record("popular", &[&page.to_string()])
    }

    async fn fetch_recent_episodes(&self, page: u32, kind: u32) -> ProviderResult<Value> {
        self.record("recent-episodes", &[&page.to_string(), &kind.to_string()])
    }

    async fn fetch_anime_list(&self, page: u32) -> ProviderResult<Value> {
        self.record("anime-list", &[&page.to_string()])
    }

    async fn fetch_direct_download_link(
        &self,
        link: &str,
        captcha_token: &str,
    ) -> ProviderResult<Value> {
        self.record("download", &[link, captcha_token])
    }
}
