mod config;
mod editor;
mod errors;
mod models;
mod notifications;
mod persistence;
mod render;
mod routes;
mod state;
mod validation;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StorageBackend};
use crate::persistence::file_store::FileStore;
use crate::persistence::redis_store::RedisStore;
use crate::persistence::store::MemoryStore;
use crate::persistence::{KeyValueStore, ResumeRepository};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config).await?;
    let repository = ResumeRepository::with_prefix(store, &config.storage_key_prefix);
    info!("Storage backend: {}", repository.backend());

    // Resume where the last session left off, if anything was saved.
    let initial = match repository.load().await {
        Some(saved) => {
            info!("Loaded saved resume {:?}", saved.id);
            saved
        }
        None => Default::default(),
    };
    info!("Auto-save delay: {:?}", config.autosave_delay);

    let state = AppState::new(repository, initial, config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the browser UI is served from another origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs the key-value store selected by `STORAGE_BACKEND`.
async fn build_store(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.storage_backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::File => {
            info!("Storing resumes under {}", config.data_dir.display());
            Arc::new(FileStore::new(&config.data_dir))
        }
        StorageBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL must be set when STORAGE_BACKEND=redis")?;
            Arc::new(RedisStore::connect(url).await?)
        }
    };
    Ok(store)
}
