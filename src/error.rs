// src/error.rs
// =============================================================================
// Error types for the fetch layer.
//
// Every failure propagates to the caller. Nothing here retries, falls back to
// a default value, or checks the HTTP status before parsing: a 500 with a JSON
// body is a successful fetch as far as this layer is concerned.
//
// The binary (main.rs) works with anyhow::Result and converts these with `?`.
// =============================================================================

use thiserror::Error;

/// Result alias used by the api module
pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    /// A base URL needed by the requested operation was not configured
    #[error("{0} is not configured (pass --{1} or set {0})")]
    MissingService(&'static str, &'static str),

    /// A configured base URL, or a request URL built from it, is not a URL
    #[error("invalid service URL {url:?}: {source}")]
    InvalidServiceUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Sending the request or reading the body failed
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not valid JSON
    #[error("response from {url} (HTTP {status}) is not valid JSON: {source}")]
    Decode {
        url: String,
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// URL of the request that failed, when the failure came from a request
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchError::InvalidServiceUrl { url, .. }
            | FetchError::Network { url, .. }
            | FetchError::Decode { url, .. } => Some(url),
            _ => None,
        }
    }
}
