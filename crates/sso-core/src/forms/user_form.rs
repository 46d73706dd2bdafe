// ============================================================================
// SSO Core - User Form
// File: crates/sso-core/src/forms/user_form.rs
// ============================================================================

use sso_shared::utils::non_blank;
use validator::Validate;

use crate::domain::{UserAccount, UserPayload};
use crate::error::DomainError;
use super::entity_form::{EntityForm, FormDraft, FormEntity, FormMode, FormSubmission};
use super::multi_value::MultiValueInput;
use super::{parse_bool, required, REQUIRED_MESSAGE};

pub type UserForm = EntityForm<UserDraft>;

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct UserDraft {
    #[validate(
        custom(function = "required"),
        length(max = 50, message = "Username must be at most 50 characters")
    )]
    pub username: String,

    #[validate(length(max = 50, message = "Nickname must be at most 50 characters"))]
    pub nickname: String,

    #[validate(custom(function = "required"), email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(max = 20, message = "Phone number too long"))]
    pub phone: String,

    /// Required on create, optional on edit (blank keeps the current one).
    #[validate(length(max = 128, message = "Password too long"))]
    pub password: String,

    pub enabled: bool,
    pub role_ids: MultiValueInput,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            username: String::new(),
            nickname: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            enabled: true,
            role_ids: MultiValueInput::default(),
        }
    }
}

const MIN_PASSWORD_LENGTH: usize = 8;

impl FormDraft for UserDraft {
    const ENTITY: &'static str = "user";
    const FIELDS: &'static [&'static str] =
        &["username", "nickname", "email", "phone", "password", "enabled", "role_ids"];

    fn set_field(&mut self, field: &str, value: &str) -> Result<(), DomainError> {
        match field {
            "username" => self.username = value.to_string(),
            "nickname" => self.nickname = value.to_string(),
            "email" => self.email = value.to_string(),
            "phone" => self.phone = value.to_string(),
            "password" => self.password = value.to_string(),
            "enabled" => self.enabled = parse_bool(field, value)?,
            "role_ids" => self.role_ids = MultiValueInput::parse_delimited(value),
            other => return Err(DomainError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    fn mode_errors(&self, mode: &FormMode) -> Vec<(&'static str, String)> {
        let password = self.password.trim();
        if password.is_empty() {
            if mode.is_create() {
                return vec![("password", REQUIRED_MESSAGE.to_string())];
            }
            return Vec::new();
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return vec![(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
            )];
        }
        Vec::new()
    }
}

impl FormEntity for UserAccount {
    type Draft = UserDraft;

    fn entity_id(&self) -> String {
        self.user_id.clone()
    }

    fn to_draft(&self) -> UserDraft {
        UserDraft {
            username: self.username.clone(),
            nickname: self.nickname.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            password: String::new(),
            enabled: self.enabled,
            role_ids: MultiValueInput::new(self.role_ids.iter().cloned()),
        }
    }
}

impl From<FormSubmission<UserDraft>> for UserPayload {
    fn from(submission: FormSubmission<UserDraft>) -> Self {
        let draft = submission.draft;
        UserPayload {
            user_id: submission.id,
            username: draft.username.trim().to_string(),
            nickname: non_blank(&draft.nickname),
            email: draft.email.trim().to_string(),
            phone: non_blank(&draft.phone),
            password: non_blank(&draft.password),
            enabled: draft.enabled,
            role_ids: draft.role_ids.into_values(),
        }
    }
}
