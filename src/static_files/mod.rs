//! Static asset serving.
//!
//! # Responsibilities
//! - Serve files verbatim from the configured root directory
//! - Serve the fixed HTML entry point for the root path
//!
//! # Design Decisions
//! - `tower_http::services::ServeDir` handles content types and 404s;
//!   a missing file falls through to its default not-found response
//! - The index file is read per request, so edits show up without a
//!   restart

use std::path::Path;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tower_http::services::ServeDir;

/// Build the fallback service serving files under `root_dir`.
pub fn asset_service(root_dir: &str) -> ServeDir {
    ServeDir::new(root_dir)
}

/// Read and serve the HTML entry point.
///
/// A read failure is logged and surfaced as a plain 500; this is a
/// deployment problem, not a client error.
pub async fn index_response(index_file: &Path) -> Response {
    match tokio::fs::read_to_string(index_file).await {
        Ok(contents) => Html(contents).into_response(),
        Err(e) => {
            tracing::error!(
                path = %index_file.display(),
                error = %e,
                "Failed to read index file"
            );
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
