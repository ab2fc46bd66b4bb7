//! Error type for API clients
//!
//! The API client layer is the only layer that touches raw transport
//! errors; everything is re-thrown as a single [`ClientError`] carrying a
//! human-readable message. When the server returns a structured error body
//! it is kept verbatim so callers can surface field-level validation detail.

use thiserror::Error;

/// Errors that can occur when making API requests.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response was received
    /// (connection refused, DNS failure, etc.).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned an error response (4xx or 5xx).
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The response body, serialized verbatim.
        body: String,
    },

    /// Failed to deserialise a successful response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Failed to write downloaded content to disk.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Create an `Api` error from a status code and raw body text.
    ///
    /// An empty body is replaced with a generic status message so the UI
    /// never shows a blank error.
    pub fn from_status(status: u16, body: String) -> Self {
        let body = if body.trim().is_empty() {
            format!("Server returned status {}", status)
        } else {
            body
        };
        Self::Api { status, body }
    }

    /// Whether this is a "not found" (404) error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Whether this is an "unauthorized" (401) error.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }

    /// Whether this is a validation rejection (400 or 422).
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Api { status: 400, .. } | Self::Api { status: 422, .. })
    }

    /// Get the user-facing error message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(e) => {
                if e.is_connect() {
                    "Unable to connect to the server. Please check your connection.".to_string()
                } else {
                    "An unexpected network error occurred.".to_string()
                }
            }
            Self::Api { body, .. } => body.clone(),
            Self::Parse(_) => "Received an unexpected response from the server.".to_string(),
            Self::Io(e) => format!("Failed to save file: {}", e),
        }
    }
}

/// Result type alias using ClientError
pub type ClientResult<T> = Result<T, ClientError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_api_error_keeps_body_verbatim() {
        let body = r#"{"name":["role with this name already exists."]}"#;
        let err = ClientError::from_status(400, body.to_string());
        assert_eq!(err.user_message(), body);
        assert_eq!(
            err.to_string(),
            format!("API error (400): {}", body)
        );
    }

    #[test]
    fn test_api_error_empty_body_gets_status_message() {
        let err = ClientError::from_status(500, "  ".to_string());
        assert_eq!(err.user_message(), "Server returned status 500");
    }

    #[test]
    fn test_status_classification() {
        assert!(ClientError::from_status(404, "missing".into()).is_not_found());
        assert!(ClientError::from_status(401, "no token".into()).is_unauthorized());
        assert!(ClientError::from_status(400, "bad".into()).is_validation());
        assert!(ClientError::from_status(422, "bad".into()).is_validation());
        assert!(!ClientError::from_status(500, "boom".into()).is_validation());
    }

    #[test]
    fn test_parse_error_message() {
        let err = ClientError::Parse("expected value at line 1".to_string());
        assert_eq!(
            err.user_message(),
            "Received an unexpected response from the server."
        );
    }
}
