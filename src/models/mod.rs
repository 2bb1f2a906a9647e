//! Request and Response models
//!
//! Query-string DTOs accepted by the routes and the bodies the service
//! builds itself.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{DownloadQuery, PageQuery, RecentEpisodesQuery, WatchQuery};
pub use responses::{DiscoveryResponse, HealthResponse, MessageResponse, PROVIDER_ROUTES};
