//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID)
//! - Register the index route ahead of the static fallback
//! - Dispatch prefix-matched requests to the proxy forwarder
//! - Serve everything else from the static root
//!
//! # Design Decisions
//! - The optional upstream timeout is enforced around the forward call
//!   itself, not as a router-wide layer: an elapsed timeout is an
//!   upstream transport failure and gets the same structured JSON 500,
//!   and static or index requests never time out

use std::path::PathBuf;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::EdgeConfig;
use crate::http::error::upstream_unavailable;
use crate::http::request::{request_id, RequestIdLayer};
use crate::proxy::{ForwardError, Forwarder};
use crate::static_files;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Forwarder,
    pub index_file: PathBuf,
    pub request_timeout: Option<Duration>,
}

/// HTTP server for the edge front-end.
pub struct EdgeServer {
    router: Router,
    config: EdgeConfig,
}

impl EdgeServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: EdgeConfig) -> Result<Self, ForwardError> {
        let forwarder = Forwarder::from_config(&config.proxy)?;

        let state = AppState {
            forwarder,
            index_file: PathBuf::from(&config.static_files.index_file),
            request_timeout: config.proxy.request_timeout_secs.map(Duration::from_secs),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Route precedence: the exact index route first, then the proxy
    /// prefix, with static file lookup as the fallback for everything
    /// that matched neither.
    fn build_router(config: &EdgeConfig, state: AppState) -> Router {
        let prefix = config.proxy.prefix.as_str();

        Router::new()
            .route("/", get(index_handler))
            .route(prefix, any(proxy_handler))
            .route(&format!("{prefix}/{{*rest}}"), any(proxy_handler))
            .fallback_service(static_files::asset_service(&config.static_files.root_dir))
            .with_state(state)
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &EdgeConfig {
        &self.config
    }
}

/// Serve the fixed HTML entry point for the exact path "/".
async fn index_handler(State(state): State<AppState>) -> Response {
    static_files::index_response(&state.index_file).await
}

/// Forward a prefix-matched request to the Task Service.
///
/// Exactly one attempt. On transport failure, including an elapsed
/// upstream timeout, the client gets the structured JSON 500 and the
/// failure is logged with its request ID.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let id = request_id(&request).to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    tracing::debug!(
        request_id = %id,
        method = %method,
        path = %path,
        upstream = %state.forwarder.authority(),
        "Proxying request"
    );

    let forward = state.forwarder.forward(request);
    let result = match state.request_timeout {
        Some(limit) => match tokio::time::timeout(limit, forward).await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!(
                    request_id = %id,
                    method = %method,
                    path = %path,
                    timeout_secs = limit.as_secs(),
                    "Upstream timed out"
                );
                return upstream_unavailable(format!(
                    "upstream did not respond within {}s",
                    limit.as_secs()
                ));
            }
        },
        None => forward.await,
    };

    match result {
        Ok(response) => response.into_response(),
        Err(e) => {
            match &e {
                ForwardError::Upstream(_) => tracing::error!(
                    request_id = %id,
                    method = %method,
                    path = %path,
                    error = %e,
                    "Upstream unreachable"
                ),
                // Never reached the upstream at all; keep the log honest
                // even though the client sees the same error shape.
                ForwardError::InvalidUpstream(_) | ForwardError::Rewrite(_) => tracing::error!(
                    request_id = %id,
                    method = %method,
                    path = %path,
                    error = %e,
                    "Request rewrite failed"
                ),
            }
            upstream_unavailable(e)
        }
    }
}
