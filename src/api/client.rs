// src/api/client.rs
// =============================================================================
// Builds the HTTP client used by every fetch, and the one request shape they
// all share: GET a URL, read the body, parse it as JSON.
//
// Credentials:
// - The client owns a cookie jar. Cookies the services set are kept and sent
//   back on later requests to the same origin.
// - Cookies passed with --cookie are seeded into the jar for every configured
//   service URL, so the very first request is already authenticated.
//
// Nothing here retries or inspects the status code before parsing.
// =============================================================================

use crate::config::{ClientConfig, ServiceConfig};
use crate::error::{FetchError, Result};
use reqwest::cookie::Jar;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;
use url::Url;

// Builds a reqwest Client with a cookie jar
//
// Parameters:
//   services: base URLs that seeded cookies are scoped to
//   options: cookies to seed and the optional timeout
//
// Returns: the Client, or InvalidServiceUrl if a base URL has to be parsed
// for cookie seeding and is not a URL
pub fn build_client(services: &ServiceConfig, options: &ClientConfig) -> Result<Client> {
    let jar = Arc::new(Jar::default());

    let cookies: Vec<&str> = options
        .cookies
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect();

    if !cookies.is_empty() {
        for target in services.request_targets() {
            let url = Url::parse(target).map_err(|source| FetchError::InvalidServiceUrl {
                url: target.to_string(),
                source,
            })?;

            for cookie in &cookies {
                jar.add_cookie_str(cookie, &url);
            }
            debug!(service = %url, count = cookies.len(), "seeded cookies");
        }
    }

    let mut builder = Client::builder().cookie_provider(jar);
    if let Some(timeout) = options.timeout() {
        builder = builder.timeout(timeout);
    }

    builder.build().map_err(FetchError::Client)
}

// Issues a GET and parses the body as JSON, whatever the status code
//
// Errors:
//   InvalidServiceUrl - the base URL it was built from is not a URL
//   Network           - connection failed or the body could not be read
//   Decode            - the body is not JSON
pub(crate) async fn get_json(client: &Client, url: String) -> Result<Value> {
    debug!(%url, "GET");

    let target = match Url::parse(&url) {
        Ok(target) => target,
        Err(source) => return Err(FetchError::InvalidServiceUrl { url, source }),
    };

    let response = match client.get(target).send().await {
        Ok(response) => response,
        Err(source) => return Err(FetchError::Network { url, source }),
    };

    let status = response.status();
    debug!(%url, status = status.as_u16(), "response");

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(source) => return Err(FetchError::Network { url, source }),
    };

    serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
        url,
        status: status.as_u16(),
        source,
    })
}
