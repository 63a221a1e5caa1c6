// src/server/handlers/parse.rs
//! Handwritten name normalization handler

use super::error_response;
use crate::normalize::parse_handwriting;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub msg: String,
}

/// Normalize a recipe name
///
/// POST /parse
pub async fn parse_name(Json(request): Json<ParseRequest>) -> Response {
    match parse_handwriting(&request.input) {
        Some(msg) => (StatusCode::OK, Json(ParseResponse { msg })).into_response(),
        None => error_response(StatusCode::BAD_REQUEST, "invalid_name", "Invalid recipe name"),
    }
}
