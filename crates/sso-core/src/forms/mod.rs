//! Entity forms
//!
//! Create/edit state for users, roles, permissions, menus and OAuth2
//! clients. Validation runs synchronously on submit; each field's error is
//! cleared as soon as that field is edited.

pub mod entity_form;
pub mod multi_value;
pub mod user_form;
pub mod role_form;
pub mod permission_form;
pub mod menu_form;
pub mod client_form;

use std::borrow::Cow;

use validator::ValidationError;

pub use entity_form::{EntityForm, FormDraft, FormEntity, FormMode, FormSubmission, SubmitOutcome};
pub use multi_value::MultiValueInput;
pub use user_form::{UserDraft, UserForm};
pub use role_form::{RoleDraft, RoleForm};
pub use permission_form::{PermissionDraft, PermissionForm};
pub use menu_form::{MenuDraft, MenuForm};
pub use client_form::{ClientDraft, ClientForm};

pub(crate) const REQUIRED_MESSAGE: &str = "This field is required";

pub(crate) fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed(REQUIRED_MESSAGE)));
    }
    Ok(())
}

/// Letters, digits and `_ : - .` only, e.g. `ROLE_ADMIN` or `user:delete`.
pub(crate) fn code_format(value: &str) -> Result<(), ValidationError> {
    let valid = value
        .trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'));
    if !valid {
        return Err(ValidationError::new("code_format").with_message(Cow::Borrowed(
            "Only letters, digits and _ : - . are allowed",
        )));
    }
    Ok(())
}

/// `required` followed by `code_format`, reported as a single error.
pub(crate) fn required_code(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    code_format(value)
}

pub(crate) fn parse_bool(field: &str, value: &str) -> Result<bool, crate::DomainError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        _ => Err(crate::DomainError::invalid_value(field, "expected true or false")),
    }
}
