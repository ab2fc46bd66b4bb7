//! Error types for Condominio Admin
//!
//! This module provides unified error handling across the application,
//! covering configuration, IO, serialization, and internal failures.
//! Errors raised while talking to the backend API live in `condo_api`
//! as `ClientError`; this type covers everything else.

use thiserror::Error;

/// The main error type for Condominio Admin
#[derive(Debug, Error)]
pub enum AdminError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: String, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Operation cancelled by user
    #[error("Operation cancelled")]
    Cancelled,

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl AdminError {
    /// Create an invalid-configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        AdminError::InvalidConfig(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        AdminError::Internal(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        AdminError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            AdminError::InvalidConfig(_) | AdminError::MissingConfig(_)
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, AdminError::Io(_) | AdminError::FileWrite { .. })
    }
}

/// Result type alias using AdminError
pub type AdminResult<T> = Result<T, AdminError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> AdminResult<T>;
}

impl<T, E: Into<AdminError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> AdminResult<T> {
        self.map_err(|e| {
            let err: AdminError = e.into();
            AdminError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invalid_config_error() {
        let err = AdminError::invalid_config("base URL must not be empty");
        assert!(err.is_config());
        assert!(!err.is_io());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: base URL must not be empty"
        );
    }

    #[test]
    fn test_missing_config_error() {
        let err = AdminError::MissingConfig("CONDO_API_BASE_URL".to_string());
        assert!(err.is_config());
        assert_eq!(
            err.to_string(),
            "Missing required configuration: CONDO_API_BASE_URL"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = AdminError::with_context("Saving PDF", "Permission denied");
        assert_eq!(err.to_string(), "Saving PDF: Permission denied");
    }

    #[test]
    fn test_io_error_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AdminError = io_err.into();
        assert!(err.is_io());
        assert!(!err.is_config());
    }

    #[test]
    fn test_result_ext_adds_context() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.with_context("Writing contract PDF").unwrap_err();
        assert!(err.to_string().starts_with("Writing contract PDF: "));
    }

    #[test]
    fn test_cancelled_error() {
        let err = AdminError::Cancelled;
        assert_eq!(err.to_string(), "Operation cancelled");
    }
}
