// src/server/routes.rs
//! Axum router configuration for the cookbook server

use crate::server::handlers::{catalog, parse};
use crate::server::{ServerConfig, SharedState};
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main application router
pub fn create_router(state: SharedState, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    let cors = if config.cors_origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    };

    let router = Router::new()
        .route("/health", get(health_check))
        .route("/parse", post(parse::parse_name))
        .route("/entry", post(catalog::create_entry))
        .route("/summary", get(catalog::get_summary))
        .with_state(state)
        .layer(cors);

    if config.trace_requests {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
