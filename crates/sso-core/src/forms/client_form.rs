// ============================================================================
// SSO Core - OAuth2 Client Form
// File: crates/sso-core/src/forms/client_form.rs
// ============================================================================

use std::borrow::Cow;

use sso_shared::utils::non_blank;
use validator::{Validate, ValidateUrl, ValidationError};

use crate::domain::{GrantType, OAuth2Client, OAuth2ClientPayload};
use crate::error::DomainError;
use super::entity_form::{EntityForm, FormDraft, FormEntity, FormMode, FormSubmission};
use super::multi_value::MultiValueInput;
use super::{required, required_code, REQUIRED_MESSAGE};

pub type ClientForm = EntityForm<ClientDraft>;

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ClientDraft {
    #[validate(custom(function = "required_code"))]
    pub client_id: String,

    #[validate(
        custom(function = "required"),
        length(max = 100, message = "Client name must be at most 100 characters")
    )]
    pub client_name: String,

    /// Required on create; blank on edit keeps the stored secret.
    pub client_secret: String,

    #[validate(custom(function = "redirect_uris"))]
    pub redirect_uris: MultiValueInput,

    pub scopes: MultiValueInput,

    #[validate(custom(function = "grant_types"))]
    pub grant_types: MultiValueInput,

    pub auth_methods: MultiValueInput,
}

impl Default for ClientDraft {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_name: String::new(),
            client_secret: String::new(),
            redirect_uris: MultiValueInput::default(),
            scopes: MultiValueInput::new(["openid".to_string(), "profile".to_string()]),
            grant_types: MultiValueInput::new([
                GrantType::AuthorizationCode.as_str().to_string(),
                GrantType::RefreshToken.as_str().to_string(),
            ]),
            auth_methods: MultiValueInput::new(["client_secret_basic".to_string()]),
        }
    }
}

fn redirect_uris(input: &MultiValueInput) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("At least one redirect URI is required")));
    }
    if let Some(bad) = input.values().iter().find(|uri| !uri.validate_url()) {
        return Err(ValidationError::new("url")
            .with_message(Cow::Owned(format!("Invalid redirect URI: {}", bad))));
    }
    Ok(())
}

fn grant_types(input: &MultiValueInput) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("Select at least one grant type")));
    }
    if let Some(bad) = input.values().iter().find(|g| GrantType::from_str(g).is_none()) {
        return Err(ValidationError::new("grant_type")
            .with_message(Cow::Owned(format!("Unsupported grant type: {}", bad))));
    }
    Ok(())
}

impl FormDraft for ClientDraft {
    const ENTITY: &'static str = "client";
    const FIELDS: &'static [&'static str] = &[
        "client_id",
        "client_name",
        "client_secret",
        "redirect_uris",
        "scopes",
        "grant_types",
        "auth_methods",
    ];

    fn set_field(&mut self, field: &str, value: &str) -> Result<(), DomainError> {
        match field {
            "client_id" => self.client_id = value.to_string(),
            "client_name" => self.client_name = value.to_string(),
            "client_secret" => self.client_secret = value.to_string(),
            "redirect_uris" => self.redirect_uris = MultiValueInput::parse_delimited(value),
            "scopes" => self.scopes = MultiValueInput::parse_delimited(value),
            "grant_types" => self.grant_types = MultiValueInput::parse_delimited(value),
            "auth_methods" => self.auth_methods = MultiValueInput::parse_delimited(value),
            other => return Err(DomainError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    fn mode_errors(&self, mode: &FormMode) -> Vec<(&'static str, String)> {
        if mode.is_create() && self.client_secret.trim().is_empty() {
            return vec![("client_secret", REQUIRED_MESSAGE.to_string())];
        }
        Vec::new()
    }
}

impl FormEntity for OAuth2Client {
    type Draft = ClientDraft;

    fn entity_id(&self) -> String {
        self.id.clone()
    }

    fn to_draft(&self) -> ClientDraft {
        ClientDraft {
            client_id: self.client_id.clone(),
            client_name: self.client_name.clone(),
            client_secret: String::new(),
            redirect_uris: MultiValueInput::new(self.redirect_uris.iter().cloned()),
            scopes: MultiValueInput::new(self.scopes.iter().cloned()),
            grant_types: MultiValueInput::new(self.authorization_grant_types.iter().cloned()),
            auth_methods: MultiValueInput::new(self.client_authentication_methods.iter().cloned()),
        }
    }
}

impl From<FormSubmission<ClientDraft>> for OAuth2ClientPayload {
    fn from(submission: FormSubmission<ClientDraft>) -> Self {
        let draft = submission.draft;
        OAuth2ClientPayload {
            id: submission.id,
            client_id: draft.client_id.trim().to_string(),
            client_name: draft.client_name.trim().to_string(),
            client_secret: non_blank(&draft.client_secret),
            redirect_uris: draft.redirect_uris.into_values(),
            scopes: draft.scopes.into_values(),
            authorization_grant_types: draft
                .grant_types
                .into_values()
                .iter()
                .filter_map(|g| GrantType::from_str(g))
                .map(|g| g.as_str().to_string())
                .collect(),
            client_authentication_methods: draft.auth_methods.into_values(),
        }
    }
}
