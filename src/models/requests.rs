//! Request DTOs
//!
//! Query strings accepted by the provider routes. Fields stay as raw
//! strings so a malformed value never turns into an extractor rejection;
//! the accessors decide what each value means. Handlers extract these with
//! [`crate::api::LenientQuery`], which also absorbs repeated keys.

use serde::Deserialize;

use crate::error::ApiError;
use crate::provider::StreamingServer;

/// Page used when `page` is absent or not a positive integer.
pub const DEFAULT_PAGE: u32 = 1;

/// Listing used when `type` is absent or not a positive integer.
pub const DEFAULT_EPISODE_KIND: u32 = 1;

// Pages are 1-based; zero and unparsable values fall back instead of reaching the provider
fn positive_or(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

/// `?page=` on paginated routes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> u32 {
        positive_or(self.page.as_deref(), DEFAULT_PAGE)
    }
}

/// `?page=&type=` on the recent-episodes route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecentEpisodesQuery {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl RecentEpisodesQuery {
    pub fn page(&self) -> u32 {
        positive_or(self.page.as_deref(), DEFAULT_PAGE)
    }

    pub fn kind(&self) -> u32 {
        positive_or(self.kind.as_deref(), DEFAULT_EPISODE_KIND)
    }
}

/// `?server=` on the watch route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WatchQuery {
    #[serde(default)]
    pub server: Option<String>,
}

impl WatchQuery {
    /// The requested server, `None` when absent or empty.
    ///
    /// Any other value outside [`StreamingServer`] is rejected.
    pub fn server(&self) -> Result<Option<StreamingServer>, ApiError> {
        match self.server.as_deref() {
            None | Some("") => Ok(None),
            Some(name) => name
                .parse()
                .map(Some)
                .map_err(|_| ApiError::InvalidServer),
        }
    }
}

/// `?link=` on the download route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DownloadQuery {
    #[serde(default)]
    pub link: Option<String>,
}

impl DownloadQuery {
    pub fn link(&self) -> Result<&str, ApiError> {
        match self.link.as_deref() {
            Some(link) if !link.is_empty() => Ok(link),
            _ => Err(ApiError::InvalidLink),
        }
    }
}
