//! Observability subsystem.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Log level configurable via config and the RUST_LOG environment
//!   variable; the environment wins
//! - No metrics exporter: this server's observable surface is its logs

pub mod logging;
