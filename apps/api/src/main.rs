mod config;
mod editor;
mod errors;
mod extract;
mod models;
mod pages;
mod render;
mod routes;
mod state;
mod storage;
mod templates;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn KeyValueStore> = match &config.storage_dir {
        Some(dir) => Arc::new(FileStore::open(dir).with_context(|| {
            format!("Could not open storage directory {}", dir.display())
        })?),
        None => {
            warn!("STORAGE_DIR is empty; saved records will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };

    let state = AppState::new(config.clone(), store);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
