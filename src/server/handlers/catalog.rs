// src/server/handlers/catalog.rs
//! Catalog entry and summary handlers

use super::{catalog_error, error_response};
use crate::catalog::{EntryRequest, SummaryResponse};
use crate::server::SharedState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{info, warn};

/// Query parameters for summaries
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub name: Option<String>,
}

/// Add an ingredient or recipe
///
/// POST /entry
pub async fn create_entry(
    State(state): State<SharedState>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    // Decoded by hand so type mismatches become 400s like other validation failures
    let request: EntryRequest = match serde_json::from_value(body) {
        Ok(request) => request,
        Err(e) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "invalid_entry",
                format!("invalid entry: {}", e),
            );
        }
    };

    let entry = match request.into_entry() {
        Ok(entry) => entry,
        Err(e) => {
            warn!("Rejected entry request: {}", e);
            return catalog_error(&e);
        }
    };

    let name = entry.name().to_string();
    let kind = entry.kind();
    let mut state_write = state.write().await;
    match state_write.catalog.add_entry(entry) {
        Ok(()) => {
            info!("Added {} {}", kind, name);
            StatusCode::OK.into_response()
        }
        Err(e) => catalog_error(&e),
    }
}

/// Flatten a recipe into ingredient totals
///
/// GET /summary?name=...
pub async fn get_summary(
    State(state): State<SharedState>,
    Query(query): Query<SummaryQuery>,
) -> Response {
    let Some(name) = query.name.filter(|name| !name.is_empty()) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "not_found",
            "Given recipe name not found in the cookbook",
        );
    };

    let state_read = state.read().await;
    match state_read.catalog.summarize(&name) {
        Ok(summary) => (StatusCode::OK, Json(SummaryResponse::from(summary))).into_response(),
        Err(e) => catalog_error(&e),
    }
}
