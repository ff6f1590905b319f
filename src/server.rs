//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, router construction, and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::KvStore;
use crate::infrastructure::store::{MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// How often the in-memory store drops expired keys.
const MEMORY_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Key-value store (Redis, or the in-memory store when Redis is not configured)
/// - Link service and shared state
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Redis is configured but unreachable after all retries
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;

    let state = AppState::new(store);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Connects the configured store.
///
/// Redis holds the only copy of the data, so an unreachable Redis is fatal
/// rather than a reason to fall back to memory.
pub async fn build_store(config: &Config) -> Result<Arc<dyn KvStore>> {
    match &config.redis_url {
        Some(redis_url) => {
            let store = connect_redis(redis_url, config.store_connect_retries).await?;
            tracing::info!("Store: Redis");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("REDIS_URL not set, using in-memory store (data is lost on restart)");
            let store = Arc::new(MemoryStore::new());
            store.spawn_sweeper(MEMORY_SWEEP_INTERVAL);
            Ok(store as Arc<dyn KvStore>)
        }
    }
}

/// Connects to Redis, retrying with jittered exponential backoff.
pub async fn connect_redis(redis_url: &str, retries: usize) -> Result<RedisStore> {
    let strategy = ExponentialBackoff::from_millis(100)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(retries);

    Retry::spawn(strategy, move || async move {
        RedisStore::connect(redis_url).await.inspect_err(|e| {
            tracing::warn!("Redis connection attempt failed: {}", e);
        })
    })
    .await
    .context("Failed to connect to Redis")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
