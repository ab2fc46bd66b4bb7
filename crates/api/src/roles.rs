//! Roles API client
//!
//! The list endpoint returns a projection without permission associations;
//! callers editing a role must go through [`RolesClient::fetch_by_id`] to
//! obtain the full record first.

use std::sync::Arc;

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::models::{Role, RolePayload};

/// Typed client for the role endpoints.
#[derive(Debug, Clone)]
pub struct RolesClient {
    http: Arc<ApiClient>,
}

impl RolesClient {
    /// Create a client over the shared transport.
    pub fn new(http: Arc<ApiClient>) -> Self {
        Self { http }
    }

    /// Fetch all roles (list projection, no permissions). GET `roles/`
    pub async fn fetch_all(&self) -> ClientResult<Vec<Role>> {
        let roles = self.http.get_list("roles/").await?;
        tracing::debug!("Fetched {} roles", roles.len());
        Ok(roles)
    }

    /// Fetch a single role with its permissions. GET `roles/{id}/`
    pub async fn fetch_by_id(&self, id: i64) -> ClientResult<Role> {
        self.http.get(&format!("roles/{}/", id)).await
    }

    /// Create a role. POST `roles/`
    pub async fn create(&self, payload: &RolePayload) -> ClientResult<Role> {
        let role: Role = self.http.post("roles/", payload).await?;
        tracing::info!("Created role {} ({})", role.name, role.id);
        Ok(role)
    }

    /// Update a role. PUT `roles/{id}/`
    pub async fn update(&self, id: i64, payload: &RolePayload) -> ClientResult<Role> {
        let role: Role = self.http.put(&format!("roles/{}/", id), payload).await?;
        tracing::info!("Updated role {} ({})", role.name, role.id);
        Ok(role)
    }

    /// Delete a role. DELETE `roles/{id}/`
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("roles/{}/", id)).await?;
        tracing::info!("Deleted role {}", id);
        Ok(())
    }
}
