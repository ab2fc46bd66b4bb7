//! Application configuration loaded from environment variables
//!
//! The deployment supplies the backend base URL; everything else has a
//! sensible default so the app starts with no configuration at all.

use std::env;

// ============================================================================
// Defaults
// ============================================================================

/// Default backend API base URL (local development server)
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api/";

/// Default log filter when `CONDO_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Environment variable holding the backend base URL
pub const API_BASE_URL_VAR: &str = "CONDO_API_BASE_URL";

// ============================================================================
// Config
// ============================================================================

/// Application configuration.
///
/// All values are loaded from environment variables at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend REST API. Always ends with `/` so
    /// endpoint paths can be appended directly.
    pub api_base_url: String,

    /// Log level filter (e.g. `info`, `debug`)
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            api_base_url: normalize_base_url(
                env::var(API_BASE_URL_VAR)
                    .ok()
                    .filter(|v| !v.trim().is_empty()),
            ),
            log_filter: env::var("CONDO_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

/// Normalize a configured base URL: fall back to the default when absent
/// and guarantee a trailing slash.
fn normalize_base_url(value: Option<String>) -> String {
    let mut url = value.unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_normalize_base_url_appends_slash() {
        assert_eq!(
            normalize_base_url(Some("http://example.com/api".to_string())),
            "http://example.com/api/"
        );
    }

    #[test]
    fn test_normalize_base_url_keeps_slash() {
        assert_eq!(
            normalize_base_url(Some("http://example.com/api/".to_string())),
            "http://example.com/api/"
        );
    }

    #[test]
    fn test_normalize_base_url_defaults_when_absent() {
        assert_eq!(normalize_base_url(None), DEFAULT_API_BASE_URL);
    }
}
