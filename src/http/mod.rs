//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, route registration)
//!     → request.rs (add request ID)
//!     → { index handler | proxy handler | static fallback }
//!     → error.rs (structured JSON on proxy failure)
//!     → Send to client
//! ```

pub mod error;
pub mod request;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::EdgeServer;
