//! API Routes
//!
//! Configures the Axum router: the provider routes nested under
//! [`PROVIDER_PREFIX`] plus a top-level health check.

use axum::{routing::get, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    anime_list_handler, discovery_handler, download_handler, genre_handler, genre_list_handler,
    health_handler, info_handler, movies_handler, popular_handler, recent_episodes_handler,
    search_handler, servers_handler, top_airing_handler, watch_handler, AppState,
};
use crate::error::panic_response;

/// Mount point of the provider routes.
pub const PROVIDER_PREFIX: &str = "/anime/anitaku";

/// Routes of the Anitaku provider, relative to [`PROVIDER_PREFIX`].
///
/// Static segments win over `/:query`, so `/top-airing` never reaches search.
pub fn provider_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(discovery_handler))
        .route("/:query", get(search_handler))
        .route("/info/:id", get(info_handler))
        .route("/genre/list", get(genre_list_handler))
        .route("/genre/:genre", get(genre_handler))
        .route("/watch/:episode_id", get(watch_handler))
        .route("/servers/:episode_id", get(servers_handler))
        .route("/top-airing", get(top_airing_handler))
        .route("/movies", get(movies_handler))
        .route("/popular", get(popular_handler))
        .route("/recent-episodes", get(recent_episodes_handler))
        .route("/anime-list", get(anime_list_handler))
        .route("/download", get(download_handler))
}

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - Panic guard: a panicking handler answers 500 with a generic message
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest(PROVIDER_PREFIX, provider_routes())
        .route(&format!("{}/", PROVIDER_PREFIX), get(discovery_handler))
        .route("/health", get(health_handler))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
