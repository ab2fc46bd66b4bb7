//! Role and permission records
//!
//! Roles are read with full permission objects attached but written with a
//! flat list of permission ids. The two shapes are distinct types on
//! purpose; conflating them corrupts the association on write.

use serde::{Deserialize, Serialize};

// ============================================================================
// Permission
// ============================================================================

/// Read-only permission reference data, fetched for the role form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Permission {
    /// Server-assigned id.
    pub id: i64,
    /// Human-readable name.
    pub name: String,
    /// Machine identifier (e.g. `add_contract`).
    pub codename: String,
}

// ============================================================================
// Role
// ============================================================================

/// A role record as returned by the backend.
///
/// The list endpoint returns a projection without `permissions`; only the
/// detail endpoint carries the full association. `#[serde(default)]` keeps
/// both shapes deserializable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Role {
    /// Server-assigned id.
    pub id: i64,
    /// Role name; uniqueness is enforced server-side.
    pub name: String,
    /// Attached permissions (detail endpoint only).
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl Role {
    /// Ids of the attached permissions, sorted for stable payloads.
    pub fn permission_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.permissions.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids
    }
}

/// Outbound payload for creating or updating a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RolePayload {
    /// Role name.
    pub name: String,
    /// Ids of the permissions to attach.
    pub permission_ids: Vec<i64>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_projection_has_no_permissions() {
        // The list endpoint omits the association entirely.
        let role: Role = serde_json::from_str(r#"{"id":1,"name":"Admin"}"#).unwrap();
        assert!(role.permissions.is_empty());
        assert!(role.permission_ids().is_empty());
    }

    #[test]
    fn test_detail_record_carries_permissions() {
        let json = r#"{
            "id": 2,
            "name": "Guard",
            "permissions": [
                {"id": 11, "name": "Can view visitor", "codename": "view_visitor"},
                {"id": 4, "name": "Can add visitor", "codename": "add_visitor"}
            ]
        }"#;
        let role: Role = serde_json::from_str(json).unwrap();
        assert_eq!(role.permissions.len(), 2);
        assert_eq!(role.permission_ids(), vec![4, 11]);
    }

    #[test]
    fn test_payload_sends_ids_not_objects() {
        let payload = RolePayload {
            name: "Guard".to_string(),
            permission_ids: vec![4, 11],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Guard", "permission_ids": [4, 11]})
        );
    }
}
