//! Edge server for the translation system front-end.
//!
//! Serves static assets from a local directory and reverse-proxies
//! `/api`-prefixed requests to the Task Service.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!                         │                 EDGE SERVER                  │
//!                         │                                              │
//!   Client Request        │  ┌─────────┐     ┌───────────────────────┐  │
//!   ──────────────────────┼─▶│  http   │────▶│ "/"      index page   │  │
//!                         │  │ server  │     │ "/api/*" proxy ───────┼──┼──▶ Task Service
//!                         │  └─────────┘     │ fallback static files │  │    (localhost:8001)
//!   Client Response       │                  └───────────┬───────────┘  │
//!   ◀─────────────────────┼──────────────────────────────┘              │
//!                         │                                              │
//!                         │  ┌────────────────────────────────────────┐  │
//!                         │  │         Cross-Cutting Concerns         │  │
//!                         │  │  ┌────────┐ ┌───────────┐ ┌─────────┐  │  │
//!                         │  │  │ config │ │ observa-  │ │lifecycle│  │  │
//!                         │  │  │        │ │ bility    │ │         │  │  │
//!                         │  │  └────────┘ └───────────┘ └─────────┘  │  │
//!                         │  └────────────────────────────────────────┘  │
//!                         └──────────────────────────────────────────────┘
//! ```
//!
//! There is deliberately no load balancing, retrying, or circuit breaking:
//! the proxy makes a single upstream attempt and any transport failure is
//! surfaced to the client as a structured JSON 500.

// Core subsystems
pub mod config;
pub mod http;
pub mod proxy;
pub mod static_files;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::EdgeConfig;
pub use http::EdgeServer;
pub use lifecycle::Shutdown;
