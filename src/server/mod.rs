// src/server/mod.rs
//! Cookbook HTTP server
//!
//! Thin JSON adapter over the catalog engine:
//! - `POST /parse` normalizes a handwritten recipe name
//! - `POST /entry` validates and inserts an ingredient or recipe
//! - `GET /summary?name=...` flattens a recipe into ingredient totals
//!
//! The whole catalog sits behind one lock. Insertions hold the write side
//! for the full cycle check, summaries hold the read side for the full
//! traversal.

mod handlers;
mod routes;

pub use routes::create_router;

use crate::catalog::{CatalogGraph, load_catalog_file};
use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle to the server state
pub type SharedState = Arc<RwLock<ServerState>>;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Allowed CORS origins (empty = any origin)
    pub cors_origins: Vec<String>,
    /// Attach the request tracing layer
    pub trace_requests: bool,
    /// Seed catalog loaded before serving
    pub seed_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            cors_origins: Vec::new(),
            trace_requests: true,
            seed_path: None,
        }
    }
}

/// Shared server state
#[derive(Debug, Default)]
pub struct ServerState {
    pub catalog: CatalogGraph,
}

impl ServerState {
    /// Create state with an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state around an existing catalog
    pub fn with_catalog(catalog: CatalogGraph) -> Self {
        Self { catalog }
    }
}

/// Start the cookbook server
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting cookbook server on {}", config.bind_addr);

    let catalog = match &config.seed_path {
        Some(path) => {
            tracing::info!("Seeding catalog from {}", path.display());
            load_catalog_file(path)?
        }
        None => CatalogGraph::new(),
    };
    tracing::info!("Catalog ready with {} entries", catalog.len());

    let app = create_router(
        Arc::new(RwLock::new(ServerState::with_catalog(catalog))),
        &config,
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Cookbook is ready to serve");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Cookbook server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
