// ============================================================================
// SSO Core - Permission Entity
// File: crates/sso-core/src/domain/permission.rs
// ============================================================================

use serde::{Deserialize, Serialize};
use sso_shared::utils::deserialize_id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    #[serde(deserialize_with = "deserialize_id")]
    pub permission_id: String,
    pub permission_name: String,
    /// Authority string checked by the backend, e.g. `user:delete`.
    pub permission_code: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_id: Option<String>,
    pub permission_name: String,
    pub permission_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
