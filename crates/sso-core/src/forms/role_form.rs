// ============================================================================
// SSO Core - Role Form
// File: crates/sso-core/src/forms/role_form.rs
// ============================================================================

use sso_shared::utils::non_blank;
use validator::Validate;

use crate::domain::{Role, RolePayload};
use crate::error::DomainError;
use super::entity_form::{EntityForm, FormDraft, FormEntity, FormSubmission};
use super::{required, required_code};

pub type RoleForm = EntityForm<RoleDraft>;

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct RoleDraft {
    #[validate(
        custom(function = "required"),
        length(max = 50, message = "Role name must be at most 50 characters")
    )]
    pub role_name: String,

    #[validate(custom(function = "required_code"))]
    pub role_code: String,

    #[validate(length(max = 255, message = "Description too long"))]
    pub description: String,
}

impl FormDraft for RoleDraft {
    const ENTITY: &'static str = "role";
    const FIELDS: &'static [&'static str] = &["role_name", "role_code", "description"];

    fn set_field(&mut self, field: &str, value: &str) -> Result<(), DomainError> {
        match field {
            "role_name" => self.role_name = value.to_string(),
            "role_code" => self.role_code = value.to_string(),
            "description" => self.description = value.to_string(),
            other => return Err(DomainError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}

impl FormEntity for Role {
    type Draft = RoleDraft;

    fn entity_id(&self) -> String {
        self.role_id.clone()
    }

    fn to_draft(&self) -> RoleDraft {
        RoleDraft {
            role_name: self.role_name.clone(),
            role_code: self.role_code.clone(),
            description: self.description.clone().unwrap_or_default(),
        }
    }
}

impl From<FormSubmission<RoleDraft>> for RolePayload {
    fn from(submission: FormSubmission<RoleDraft>) -> Self {
        let draft = submission.draft;
        RolePayload {
            role_id: submission.id,
            role_name: draft.role_name.trim().to_string(),
            role_code: draft.role_code.trim().to_string(),
            description: non_blank(&draft.description),
        }
    }
}
