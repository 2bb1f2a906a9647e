//! Anitaku API server
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging
//! 2. Load configuration from environment variables
//! 3. Build the provider client and the configured cache backend
//! 4. Start the cleanup task when caching in memory
//! 5. Serve the router until SIGINT/SIGTERM

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use anitaku_api::cache::{MemoryCache, RedisCache};
use anitaku_api::provider::RemoteProvider;
use anitaku_api::{create_router, spawn_cleanup_task, AppState, CacheBackend, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "anitaku_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Anitaku API server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: provider={}, cache={}, cache_ttl={}s, port={}",
        config.provider_url, config.cache_backend, config.cache_ttl, config.server_port
    );

    let (state, cleanup_handle) = build_state(&config).await?;
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wires the provider and the configured cache backend into [`AppState`].
///
/// Returns the cleanup task handle when the in-process cache is used.
async fn build_state(config: &Config) -> anyhow::Result<(AppState, Option<JoinHandle<()>>)> {
    let provider = RemoteProvider::new(&config.provider_url, config.provider_timeout)
        .context("failed to build provider client")?;

    let state = AppState::new(Arc::new(provider))
        .with_captcha_token(config.recaptcha_token.as_str())
        .with_base_ttl(Duration::from_secs(config.cache_ttl));

    match config.cache_backend {
        CacheBackend::None => {
            info!("Caching disabled");
            Ok((state, None))
        }
        CacheBackend::Memory => {
            let cache = MemoryCache::new(config.max_entries);
            let handle = spawn_cleanup_task(cache.store(), config.cleanup_interval);
            info!(max_entries = config.max_entries, "In-memory cache initialized");
            Ok((state.with_cache(Arc::new(cache)), Some(handle)))
        }
        CacheBackend::Redis => {
            let cache = RedisCache::connect(&config.redis_url)
                .await
                .context("failed to initialize Redis cache")?;
            info!("Redis cache initialized");
            Ok((state.with_cache(Arc::new(cache)), None))
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cleanup task aborted");
    }
}
