//! Credential providers for API authentication
//!
//! The transport never reads a token from ambient storage directly; it asks
//! an injected [`CredentialProvider`] on every outgoing request. A token
//! refreshed elsewhere is therefore picked up immediately — providers must
//! not cache.

use std::sync::{Arc, RwLock};

// ============================================================================
// CredentialProvider
// ============================================================================

/// A source of bearer tokens for outgoing requests.
///
/// Implementations are queried on every request. Returning `None` sends the
/// request unauthenticated; there is no pre-flight check.
pub trait CredentialProvider: Send + Sync {
    /// The current access token, if any.
    fn access_token(&self) -> Option<String>;
}

/// Shared handle to a credential provider.
pub type SharedCredentials = Arc<dyn CredentialProvider>;

// ============================================================================
// EnvCredentials
// ============================================================================

/// Reads the access token from an environment variable on every call.
///
/// This is the desktop analogue of the original deployment's per-request
/// read from browser local storage.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    /// Default environment variable holding the access token
    pub const DEFAULT_VAR: &'static str = "CONDO_ACCESS_TOKEN";

    /// Create a provider reading the given environment variable.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VAR)
    }
}

impl CredentialProvider for EnvCredentials {
    fn access_token(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|t| !t.is_empty())
    }
}

// ============================================================================
// TokenCell
// ============================================================================

/// An in-memory token holder that can be updated at runtime.
#[derive(Debug, Default)]
pub struct TokenCell {
    token: RwLock<Option<String>>,
}

impl TokenCell {
    /// Create an empty token cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cell pre-loaded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Replace the stored token.
    pub fn set(&self, token: impl Into<String>) {
        *self.token.write().expect("token lock poisoned") = Some(token.into());
    }

    /// Clear the stored token.
    pub fn clear(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }
}

impl CredentialProvider for TokenCell {
    fn access_token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_cell_starts_empty() {
        let cell = TokenCell::new();
        assert_eq!(cell.access_token(), None);
    }

    #[test]
    fn test_token_cell_set_and_clear() {
        let cell = TokenCell::new();
        cell.set("abc123");
        assert_eq!(cell.access_token(), Some("abc123".to_string()));

        cell.clear();
        assert_eq!(cell.access_token(), None);
    }

    #[test]
    fn test_token_cell_refresh_is_picked_up() {
        // A refresh elsewhere must be visible on the next read.
        let cell = Arc::new(TokenCell::with_token("old"));
        let shared: SharedCredentials = cell.clone();

        assert_eq!(shared.access_token(), Some("old".to_string()));
        cell.set("new");
        assert_eq!(shared.access_token(), Some("new".to_string()));
    }
}
