//! Anitaku API - JSON front for the Anitaku anime provider
//!
//! Exposes search, info, episode sources, listings and download links over
//! HTTP, with an optional read-through cache keyed by request parameters.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod tasks;

pub use api::{create_router, AppState};
pub use config::{CacheBackend, Config};
pub use tasks::spawn_cleanup_task;
