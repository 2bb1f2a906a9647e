//! API Module
//!
//! HTTP handlers and routing for the Anitaku provider API.
//!
//! # Endpoints (under `/anime/anitaku`)
//! - `GET /` - Route discovery
//! - `GET /:query` - Search
//! - `GET /info/:id` - Anime details
//! - `GET /genre/:genre`, `GET /genre/list` - Genre pages and genre list
//! - `GET /watch/:episodeId` - Episode sources (`?server=`)
//! - `GET /servers/:episodeId` - Episode servers
//! - `GET /top-airing`, `/movies`, `/popular`, `/recent-episodes`, `/anime-list` - Listings
//! - `GET /download` - Direct download links (`?link=`)
//!
//! Plus `GET /health` at the root.

pub mod extract;
pub mod handlers;
pub mod routes;

#[cfg(test)]
pub(crate) mod testing;

pub use extract::LenientQuery;
pub use handlers::*;
pub use routes::{create_router, provider_routes, PROVIDER_PREFIX};
