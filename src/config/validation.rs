//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the bind address and upstream URL actually parse
//! - Check the proxy prefix is a usable path prefix
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: EdgeConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::uri::Uri;

use crate::config::schema::EdgeConfig;

/// A single semantic validation failure.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    BindAddress(String),

    #[error("proxy prefix '{0}' must start with '/' and not be '/' itself")]
    ProxyPrefix(String),

    #[error("upstream '{0}' must be an absolute http URL with host and port")]
    Upstream(String),

    #[error("static root directory must not be empty")]
    StaticRoot,

    #[error("index file path must not be empty")]
    IndexFile,
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &EdgeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let prefix = &config.proxy.prefix;
    if !prefix.starts_with('/') || prefix.len() < 2 || prefix.ends_with('/') {
        errors.push(ValidationError::ProxyPrefix(prefix.clone()));
    }

    if !upstream_is_valid(&config.proxy.upstream) {
        errors.push(ValidationError::Upstream(config.proxy.upstream.clone()));
    }

    if config.static_files.root_dir.is_empty() {
        errors.push(ValidationError::StaticRoot);
    }

    if config.static_files.index_file.is_empty() {
        errors.push(ValidationError::IndexFile);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn upstream_is_valid(upstream: &str) -> bool {
    match upstream.parse::<Uri>() {
        Ok(uri) => {
            uri.scheme_str() == Some("http") && uri.authority().is_some()
        }
        Err(_) => false,
    }
}
