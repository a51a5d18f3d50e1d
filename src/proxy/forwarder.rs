//! Upstream request forwarding.
//!
//! # Responsibilities
//! - Strip the configured prefix from the request path
//! - Rewrite scheme/authority/Host to the upstream ("change origin")
//! - Forward method, headers, and body via a shared pooled client
//!
//! # Design Decisions
//! - Prefix stripping is pure string manipulation on the path; the query
//!   string passes through untouched
//! - An empty remainder after stripping becomes "/" (GET /api → GET /)
//! - The client is cheap to clone and shares its connection pool

use axum::{
    body::Body,
    http::{
        header,
        uri::{Authority, Scheme, Uri},
        HeaderValue, Request, Response,
    },
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use crate::config::schema::ProxyConfig;

/// Error type for proxy forwarding.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    /// The configured upstream URL could not be parsed.
    #[error("invalid upstream URL '{0}'")]
    InvalidUpstream(String),

    /// The rewritten request URI was rejected by the HTTP layer.
    #[error("URI rewrite failed: {0}")]
    Rewrite(#[from] axum::http::Error),

    /// The upstream was unreachable or the connection failed mid-flight.
    #[error("{0}")]
    Upstream(#[from] hyper_util::client::legacy::Error),
}

/// Forwards requests to a fixed upstream, stripping a path prefix.
#[derive(Clone)]
pub struct Forwarder {
    client: Client<HttpConnector, Body>,
    prefix: String,
    authority: Authority,
    host_value: HeaderValue,
}

impl Forwarder {
    /// Build a forwarder from the proxy configuration.
    ///
    /// Fails if the upstream URL has no parseable authority; config
    /// validation catches this earlier for file-loaded configs.
    pub fn from_config(config: &ProxyConfig) -> Result<Self, ForwardError> {
        let uri: Uri = config
            .upstream
            .parse()
            .map_err(|_| ForwardError::InvalidUpstream(config.upstream.clone()))?;
        let authority = uri
            .authority()
            .cloned()
            .ok_or_else(|| ForwardError::InvalidUpstream(config.upstream.clone()))?;
        let host_value = HeaderValue::from_str(authority.as_str())
            .map_err(|_| ForwardError::InvalidUpstream(config.upstream.clone()))?;

        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        Ok(Self {
            client,
            prefix: config.prefix.clone(),
            authority,
            host_value,
        })
    }

    /// The upstream authority requests are forwarded to.
    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    /// Rewrite a client-facing URI into the upstream URI.
    fn rewrite_uri(&self, uri: &Uri) -> Result<Uri, axum::http::Error> {
        let path = uri.path();
        let stripped = path.strip_prefix(self.prefix.as_str()).unwrap_or(path);
        let stripped = if stripped.is_empty() { "/" } else { stripped };

        let path_and_query = match uri.query() {
            Some(query) => format!("{stripped}?{query}"),
            None => stripped.to_string(),
        };

        Uri::builder()
            .scheme(Scheme::HTTP)
            .authority(self.authority.clone())
            .path_and_query(path_and_query)
            .build()
    }

    /// Forward a request to the upstream and relay its response.
    ///
    /// One attempt only; any transport failure comes back as
    /// [`ForwardError::Upstream`] for the caller to surface.
    pub async fn forward(&self, request: Request<Body>) -> Result<Response<Body>, ForwardError> {
        let (mut parts, body) = request.into_parts();

        parts.uri = self.rewrite_uri(&parts.uri)?;
        parts.headers.insert(header::HOST, self.host_value.clone());

        let response = self.client.request(Request::from_parts(parts, body)).await?;

        let (parts, body) = response.into_parts();
        Ok(Response::from_parts(parts, Body::new(body)))
    }
}
