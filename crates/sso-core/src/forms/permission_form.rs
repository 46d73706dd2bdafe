// ============================================================================
// SSO Core - Permission Form
// File: crates/sso-core/src/forms/permission_form.rs
// ============================================================================

use sso_shared::utils::non_blank;
use validator::Validate;

use crate::domain::{Permission, PermissionPayload};
use crate::error::DomainError;
use super::entity_form::{EntityForm, FormDraft, FormEntity, FormSubmission};
use super::{required, required_code};

pub type PermissionForm = EntityForm<PermissionDraft>;

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct PermissionDraft {
    #[validate(
        custom(function = "required"),
        length(max = 50, message = "Permission name must be at most 50 characters")
    )]
    pub permission_name: String,

    #[validate(custom(function = "required_code"))]
    pub permission_code: String,

    #[validate(length(max = 255, message = "Description too long"))]
    pub description: String,
}

impl FormDraft for PermissionDraft {
    const ENTITY: &'static str = "permission";
    const FIELDS: &'static [&'static str] = &["permission_name", "permission_code", "description"];

    fn set_field(&mut self, field: &str, value: &str) -> Result<(), DomainError> {
        match field {
            "permission_name" => self.permission_name = value.to_string(),
            "permission_code" => self.permission_code = value.to_string(),
            "description" => self.description = value.to_string(),
            other => return Err(DomainError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}

impl FormEntity for Permission {
    type Draft = PermissionDraft;

    fn entity_id(&self) -> String {
        self.permission_id.clone()
    }

    fn to_draft(&self) -> PermissionDraft {
        PermissionDraft {
            permission_name: self.permission_name.clone(),
            permission_code: self.permission_code.clone(),
            description: self.description.clone().unwrap_or_default(),
        }
    }
}

impl From<FormSubmission<PermissionDraft>> for PermissionPayload {
    fn from(submission: FormSubmission<PermissionDraft>) -> Self {
        let draft = submission.draft;
        PermissionPayload {
            permission_id: submission.id,
            permission_name: draft.permission_name.trim().to_string(),
            permission_code: draft.permission_code.trim().to_string(),
            description: non_blank(&draft.description),
        }
    }
}
