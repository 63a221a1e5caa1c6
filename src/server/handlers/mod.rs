// src/server/handlers/mod.rs
//! HTTP request handlers for the cookbook server

pub mod catalog;
pub mod parse;

use crate::error::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// JSON error body shared by every handler
pub(crate) fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> Response {
    let error = serde_json::json!({
        "error": code,
        "message": message.into(),
    });
    (status, Json(error)).into_response()
}

/// Map a catalog failure to a client error
///
/// Every catalog error is a rejected request, never a server fault.
pub(crate) fn catalog_error(err: &Error) -> Response {
    error_response(StatusCode::BAD_REQUEST, err.code(), err.to_string())
}
