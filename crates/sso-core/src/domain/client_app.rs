// ============================================================================
// SSO Core - OAuth2 Client Registration
// File: crates/sso-core/src/domain/client_app.rs
// Description: Registered OAuth2 client as managed by the console
// ============================================================================

use serde::{Deserialize, Serialize};
use sso_shared::utils::deserialize_id;

/// OAuth2 grant types the authorization server accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrantType {
    AuthorizationCode,
    RefreshToken,
    ClientCredentials,
    DeviceCode,
}

impl GrantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantType::AuthorizationCode => "authorization_code",
            GrantType::RefreshToken => "refresh_token",
            GrantType::ClientCredentials => "client_credentials",
            GrantType::DeviceCode => "urn:ietf:params:oauth:grant-type:device_code",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "authorization_code" => Some(GrantType::AuthorizationCode),
            "refresh_token" => Some(GrantType::RefreshToken),
            "client_credentials" => Some(GrantType::ClientCredentials),
            "urn:ietf:params:oauth:grant-type:device_code" | "device_code" => {
                Some(GrantType::DeviceCode)
            }
            _ => None,
        }
    }
}

/// Registered client row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuth2Client {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    #[serde(default)]
    pub redirect_uris: Vec<String>,
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub authorization_grant_types: Vec<String>,
    #[serde(default)]
    pub client_authentication_methods: Vec<String>,
    #[serde(default)]
    pub client_id_issued_at: Option<String>,
}

impl OAuth2Client {
    pub fn supports_grant(&self, grant: GrantType) -> bool {
        self.authorization_grant_types
            .iter()
            .any(|g| GrantType::from_str(g) == Some(grant))
    }
}

/// Create/update body for a client. The secret is only sent when set, so an
/// edit without a new secret keeps the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuth2ClientPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub client_id: String,
    pub client_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    pub redirect_uris: Vec<String>,
    pub scopes: Vec<String>,
    pub authorization_grant_types: Vec<String>,
    pub client_authentication_methods: Vec<String>,
}
