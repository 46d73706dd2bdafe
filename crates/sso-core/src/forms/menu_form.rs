// ============================================================================
// SSO Core - Menu Form
// File: crates/sso-core/src/forms/menu_form.rs
// ============================================================================

use std::borrow::Cow;

use sso_shared::utils::non_blank;
use validator::{Validate, ValidationError};

use crate::domain::{MenuNode, MenuPayload, MenuType};
use crate::error::DomainError;
use super::entity_form::{EntityForm, FormDraft, FormEntity, FormSubmission};
use super::{parse_bool, required};

pub type MenuForm = EntityForm<MenuDraft>;

/// Numeric inputs stay text until submit so a half-typed value can be shown
/// back with an error instead of being rejected on input.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct MenuDraft {
    #[validate(
        custom(function = "required"),
        length(max = 50, message = "Menu name must be at most 50 characters")
    )]
    pub menu_name: String,

    #[validate(length(max = 200, message = "Path too long"))]
    pub menu_path: String,

    pub menu_icon: String,
    pub parent_id: String,

    #[validate(custom(function = "integer"))]
    pub sort_order: String,

    #[validate(custom(function = "menu_type_code"))]
    pub menu_type: String,

    pub visible: bool,

    #[validate(length(max = 255, message = "Description too long"))]
    pub description: String,
}

impl Default for MenuDraft {
    fn default() -> Self {
        Self {
            menu_name: String::new(),
            menu_path: String::new(),
            menu_icon: String::new(),
            parent_id: String::new(),
            sort_order: "0".to_string(),
            menu_type: u8::from(MenuType::Menu).to_string(),
            visible: true,
            description: String::new(),
        }
    }
}

fn integer(value: &str) -> Result<(), ValidationError> {
    value.trim().parse::<i32>().map(|_| ()).map_err(|_| {
        ValidationError::new("integer").with_message(Cow::Borrowed("Sort order must be a whole number"))
    })
}

fn parse_menu_type(value: &str) -> Option<MenuType> {
    value.trim().parse::<u8>().ok().and_then(|v| MenuType::try_from(v).ok())
}

fn menu_type_code(value: &str) -> Result<(), ValidationError> {
    match parse_menu_type(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("menu_type")
            .with_message(Cow::Borrowed("Menu type must be 0 (directory), 1 (menu) or 2 (button)"))),
    }
}

impl FormDraft for MenuDraft {
    const ENTITY: &'static str = "menu";
    const FIELDS: &'static [&'static str] = &[
        "menu_name",
        "menu_path",
        "menu_icon",
        "parent_id",
        "sort_order",
        "menu_type",
        "visible",
        "description",
    ];

    fn set_field(&mut self, field: &str, value: &str) -> Result<(), DomainError> {
        match field {
            "menu_name" => self.menu_name = value.to_string(),
            "menu_path" => self.menu_path = value.to_string(),
            "menu_icon" => self.menu_icon = value.to_string(),
            "parent_id" => self.parent_id = value.to_string(),
            "sort_order" => self.sort_order = value.to_string(),
            "menu_type" => self.menu_type = value.to_string(),
            "visible" => self.visible = parse_bool(field, value)?,
            "description" => self.description = value.to_string(),
            other => return Err(DomainError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}

impl FormEntity for MenuNode {
    type Draft = MenuDraft;

    fn entity_id(&self) -> String {
        self.menu_id.clone()
    }

    fn to_draft(&self) -> MenuDraft {
        MenuDraft {
            menu_name: self.menu_name.clone(),
            menu_path: self.menu_path.clone(),
            menu_icon: self.menu_icon.clone().unwrap_or_default(),
            parent_id: self.parent_id.clone().unwrap_or_default(),
            sort_order: self.sort_order.to_string(),
            menu_type: u8::from(self.menu_type).to_string(),
            visible: self.visible,
            description: self.description.clone().unwrap_or_default(),
        }
    }
}

/// Fails only for a draft that skipped validation.
impl TryFrom<FormSubmission<MenuDraft>> for MenuPayload {
    type Error = DomainError;

    fn try_from(submission: FormSubmission<MenuDraft>) -> Result<Self, Self::Error> {
        let draft = submission.draft;
        let sort_order = draft
            .sort_order
            .trim()
            .parse::<i32>()
            .map_err(|_| DomainError::invalid_value("sort_order", "not a whole number"))?;
        let menu_type = parse_menu_type(&draft.menu_type)
            .ok_or_else(|| DomainError::invalid_value("menu_type", "expected 0, 1 or 2"))?;

        Ok(MenuPayload {
            menu_id: submission.id,
            menu_name: draft.menu_name.trim().to_string(),
            menu_path: draft.menu_path.trim().to_string(),
            menu_icon: non_blank(&draft.menu_icon),
            parent_id: non_blank(&draft.parent_id),
            sort_order,
            menu_type,
            visible: draft.visible,
            description: non_blank(&draft.description),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{FormMode, SubmitOutcome};

    #[test]
    fn test_defaults_are_valid_once_named() {
        let mut form = MenuForm::create();
        assert!(!form.validate());
        assert_eq!(form.errors().len(), 1);

        form.set_field("menu_name", "Audit").unwrap();
        assert!(form.validate());
    }

    #[test]
    fn test_numeric_fields_are_checked() {
        let mut form = MenuForm::create();
        form.set_field("menu_name", "Audit").unwrap();
        form.set_field("sort_order", "1.5").unwrap();
        form.set_field("menu_type", "7").unwrap();

        assert!(!form.validate());
        assert_eq!(form.error("sort_order"), Some("Sort order must be a whole number"));
        assert!(form.error("menu_type").unwrap().starts_with("Menu type must be"));

        form.set_field("sort_order", " -3 ").unwrap();
        form.set_field("menu_type", "0").unwrap();
        assert!(form.validate());
    }

    #[tokio::test]
    async fn test_edit_submission_converts() {
        let node = MenuNode {
            menu_id: "17".to_string(),
            menu_name: "Clients".to_string(),
            menu_path: "/admin/clients".to_string(),
            menu_icon: None,
            parent_id: Some("3".to_string()),
            sort_order: 4,
            menu_type: MenuType::Menu,
            visible: true,
            description: None,
        };
        let mut form = MenuForm::for_entity(Some(&node));
        assert_eq!(form.mode(), &FormMode::Edit { id: "17".to_string() });
        form.set_field("visible", "false").unwrap();

        let mut payload = None;
        let outcome = form
            .submit(|s| {
                payload = Some(MenuPayload::try_from(s));
                async { Ok(()) }
            })
            .await;

        assert_eq!(outcome, SubmitOutcome::Submitted);
        let payload = payload.unwrap().unwrap();
        assert_eq!(payload.menu_id.as_deref(), Some("17"));
        assert_eq!(payload.parent_id.as_deref(), Some("3"));
        assert_eq!(payload.sort_order, 4);
        assert_eq!(payload.menu_type, MenuType::Menu);
        assert!(!payload.visible);
        assert!(payload.menu_icon.is_none());
    }

    #[test]
    fn test_unvalidated_draft_is_rejected() {
        let submission = FormSubmission {
            id: None,
            draft: MenuDraft { sort_order: "x".into(), ..MenuDraft::default() },
        };
        assert!(MenuPayload::try_from(submission).is_err());
    }
}
