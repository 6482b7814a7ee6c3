// src/config.rs
// =============================================================================
// Runtime configuration: where the services live and how requests are sent.
//
// Each setting is a command-line flag that falls back to an environment
// variable. The service base URLs use the same VITE_* names as the web
// frontend, so one .env file serves both (main.rs loads it with dotenv
// before parsing).
//
// There are no defaults for the base URLs and their content is not
// validated. A base is only required when an operation that uses it runs.
// =============================================================================

use crate::error::{FetchError, Result};
use clap::Args;
use std::time::Duration;

/// Base URLs of the external services
#[derive(Args, Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Base URL of the exam list service
    #[arg(long, global = true, env = "VITE_EXAMLIST_SERVICE")]
    pub examlist_service: Option<String>,

    /// Base URL of the download-link service
    #[arg(long, global = true, env = "VITE_DOWNLOAD_SERVICE")]
    pub download_service: Option<String>,

    /// Base URL of the cache service (accepted, currently unused)
    #[arg(long, global = true, env = "VITE_CACHE_SERVICE")]
    pub cache_service: Option<String>,
}

impl ServiceConfig {
    /// Base URL for exam list requests, or MissingService
    pub fn examlist_base(&self) -> Result<&str> {
        self.examlist_service
            .as_deref()
            .ok_or(FetchError::MissingService("VITE_EXAMLIST_SERVICE", "examlist-service"))
    }

    /// Base URL for download-link requests, or MissingService
    pub fn download_base(&self) -> Result<&str> {
        self.download_service
            .as_deref()
            .ok_or(FetchError::MissingService("VITE_DOWNLOAD_SERVICE", "download-service"))
    }

    /// Every configured base URL that requests can be sent to.
    /// Used to scope seeded cookies.
    pub fn request_targets(&self) -> Vec<&str> {
        [&self.examlist_service, &self.download_service]
            .into_iter()
            .filter_map(|s| s.as_deref())
            .collect()
    }
}

/// How the HTTP client sends requests
#[derive(Args, Debug, Clone, Default)]
pub struct ClientConfig {
    /// Cookie to send with every request, in Set-Cookie form such as
    /// "sid=1; Path=/" (repeatable; one cookie per line in EXAMLIST_COOKIE)
    #[arg(long = "cookie", global = true, env = "EXAMLIST_COOKIE", value_delimiter = '\n')]
    pub cookies: Vec<String>,

    /// Request timeout in seconds (no timeout unless set, must be at least 1)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_bases_are_errors() {
        let config = ServiceConfig::default();
        assert!(matches!(
            config.examlist_base(),
            Err(FetchError::MissingService("VITE_EXAMLIST_SERVICE", _))
        ));
        assert!(matches!(
            config.download_base(),
            Err(FetchError::MissingService("VITE_DOWNLOAD_SERVICE", _))
        ));
    }

    #[test]
    fn test_request_targets_skip_cache_service() {
        let config = ServiceConfig {
            examlist_service: Some("http://list.local".to_string()),
            download_service: None,
            cache_service: Some("http://cache.local".to_string()),
        };
        assert_eq!(config.request_targets(), vec!["http://list.local"]);
        assert_eq!(config.examlist_base().unwrap(), "http://list.local");
    }

    #[test]
    fn test_timeout_is_optional() {
        assert_eq!(ClientConfig::default().timeout(), None);
        let config = ClientConfig {
            cookies: Vec::new(),
            timeout_secs: Some(5),
        };
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }
}
