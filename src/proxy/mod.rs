//! Reverse proxy subsystem.
//!
//! # Data Flow
//! ```text
//! request matching the proxy prefix
//!     → forwarder.rs (strip prefix, rewrite URI + Host to upstream)
//!     → hyper legacy client (pooled connections to the Task Service)
//!     → upstream response relayed verbatim
//!     or
//!     → transport failure surfaced as ForwardError
//! ```
//!
//! # Design Decisions
//! - Single attempt per request: no retries, no circuit breaking
//! - "Change origin" semantics: outbound Host is the upstream authority
//! - Response bodies are streamed, never buffered

pub mod forwarder;

pub use forwarder::{ForwardError, Forwarder};
