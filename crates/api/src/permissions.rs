//! Permissions API client
//!
//! Permissions are read-only reference data; only the catalog fetch exists.

use std::sync::Arc;

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::models::Permission;

/// Typed client for the permission catalog.
#[derive(Debug, Clone)]
pub struct PermissionsClient {
    http: Arc<ApiClient>,
}

impl PermissionsClient {
    /// Create a client over the shared transport.
    pub fn new(http: Arc<ApiClient>) -> Self {
        Self { http }
    }

    /// Fetch the permission catalog. GET `permissions/`
    pub async fn fetch_all(&self) -> ClientResult<Vec<Permission>> {
        let permissions = self.http.get_list("permissions/").await?;
        tracing::debug!("Fetched {} permissions", permissions.len());
        Ok(permissions)
    }
}
