// ============================================================================
// SSO Core - Role Menu Relation
// File: crates/sso-core/src/domain/role_menu.rs
// Description: Links a role to the menus it may see
// ============================================================================

use serde::{Deserialize, Serialize};
use sso_shared::utils::deserialize_id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMenuRelation {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub role_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub menu_id: String,
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub menu_name: Option<String>,
}

/// Replaces the menu set of one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMenuAssignment {
    pub role_id: String,
    pub menu_ids: Vec<String>,
}

impl RoleMenuAssignment {
    /// Duplicate menu ids are dropped, first occurrence wins.
    pub fn new(role_id: impl Into<String>, menu_ids: impl IntoIterator<Item = String>) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for id in menu_ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self { role_id: role_id.into(), menu_ids: unique }
    }
}
