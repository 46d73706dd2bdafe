// ============================================================================
// SSO Core - Role Entity
// File: crates/sso-core/src/domain/role.rs
// ============================================================================

use serde::{Deserialize, Serialize};
use sso_shared::utils::deserialize_id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(deserialize_with = "deserialize_id")]
    pub role_id: String,
    pub role_name: String,
    pub role_code: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    pub role_name: String,
    pub role_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
