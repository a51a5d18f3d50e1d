//! OS signal handling.
//!
//! # Responsibilities
//! - Register the Ctrl+C handler
//! - Translate the signal into a shutdown trigger
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - A failed handler registration is logged, not fatal; the process
//!   can still be stopped by other means

use crate::lifecycle::shutdown::Shutdown;

/// Wait for Ctrl+C and trigger graceful shutdown.
pub async fn shutdown_on_signal(shutdown: Shutdown) {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
    shutdown.trigger();
}
