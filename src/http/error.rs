//! Structured proxy error responses.
//!
//! # Responsibilities
//! - Shape the client-visible JSON body for proxy transport failures
//! - Keep the shape stable: `{ code, message, error }`
//!
//! # Design Decisions
//! - Upstream failures are always a 500 with a fixed human-readable
//!   message; the underlying error text rides along in `error`
//! - Static-file misses are not application errors and never use this path

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Client-facing message for any upstream transport failure.
pub const UPSTREAM_UNAVAILABLE: &str = "Task Service unavailable";

/// JSON body returned when the proxy cannot reach the upstream.
#[derive(Debug, Serialize)]
pub struct ProxyErrorBody {
    pub code: u16,
    pub message: String,
    pub error: String,
}

/// Synthesize the 500 response for a failed upstream attempt.
pub fn upstream_unavailable(detail: impl ToString) -> Response {
    let body = ProxyErrorBody {
        code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        message: UPSTREAM_UNAVAILABLE.to_string(),
        error: detail.to_string(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
