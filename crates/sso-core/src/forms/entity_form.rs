// ============================================================================
// SSO Core - Entity Form
// File: crates/sso-core/src/forms/entity_form.rs
// Description: Create/edit form state with per-field validation errors
// ============================================================================

use std::collections::BTreeMap;
use std::future::Future;

use tracing::{error, info};
use validator::{Validate, ValidationErrors};

use crate::error::DomainError;

/// Editable field values of one entity form.
pub trait FormDraft: Validate + Clone + Send {
    /// Entity label used in log lines.
    const ENTITY: &'static str;

    /// Names accepted by `set_field`, also the keys of the error map.
    const FIELDS: &'static [&'static str];

    fn set_field(&mut self, field: &str, value: &str) -> Result<(), DomainError>;

    /// Checks that depend on the mode, such as a secret required on create.
    fn mode_errors(&self, _mode: &FormMode) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// An existing record a form can be opened on.
pub trait FormEntity {
    type Draft: FormDraft;

    fn entity_id(&self) -> String;
    fn to_draft(&self) -> Self::Draft;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

impl FormMode {
    pub fn is_create(&self) -> bool {
        matches!(self, FormMode::Create)
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            FormMode::Create => None,
            FormMode::Edit { id } => Some(id),
        }
    }
}

/// What the submit handler receives. `id` is set in edit mode only.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSubmission<D> {
    pub id: Option<String>,
    pub draft: D,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    /// Required-field or format errors; the handler was not called.
    Invalid,
    /// The handler failed; inputs are kept for another attempt.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct EntityForm<D: FormDraft> {
    mode: FormMode,
    draft: D,
    errors: BTreeMap<String, String>,
    submit_error: Option<String>,
}

impl<D: FormDraft + Default> EntityForm<D> {
    pub fn create() -> Self {
        Self::with_mode(FormMode::Create, D::default())
    }

    /// Edit mode when `entity` is given, create mode otherwise.
    pub fn for_entity<E>(entity: Option<&E>) -> Self
    where
        E: FormEntity<Draft = D>,
    {
        match entity {
            Some(e) => Self::edit(e.entity_id(), e.to_draft()),
            None => Self::create(),
        }
    }
}

impl<D: FormDraft> EntityForm<D> {
    pub fn edit(id: impl Into<String>, draft: D) -> Self {
        Self::with_mode(FormMode::Edit { id: id.into() }, draft)
    }

    fn with_mode(mode: FormMode, draft: D) -> Self {
        Self {
            mode,
            draft,
            errors: BTreeMap::new(),
            submit_error: None,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Set one field from text input and clear that field's error only.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), DomainError> {
        self.draft.set_field(field, value)?;
        self.errors.remove(field);
        Ok(())
    }

    /// Edit the draft directly (e.g. a multi-value list) and clear `field`'s error.
    pub fn update<F>(&mut self, field: &str, edit: F) -> Result<(), DomainError>
    where
        F: FnOnce(&mut D),
    {
        if !D::FIELDS.contains(&field) {
            return Err(DomainError::UnknownField(field.to_string()));
        }
        edit(&mut self.draft);
        self.errors.remove(field);
        Ok(())
    }

    /// Run every check and replace the error map. True when clean.
    pub fn validate(&mut self) -> bool {
        let mut errors = match self.draft.validate() {
            Ok(()) => BTreeMap::new(),
            Err(e) => collect_errors(&e),
        };
        for (field, message) in self.draft.mode_errors(&self.mode) {
            errors.entry(field.to_string()).or_insert(message);
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Validate, then hand the draft to `handler`.
    ///
    /// Nothing is sent while errors exist. A failing handler is logged and
    /// leaves the form untouched so the operator can fix and resubmit.
    /// Dropping the returned future before it completes leaves the form as
    /// it was after validation; it can be submitted again.
    pub async fn submit<F, Fut>(&mut self, handler: F) -> SubmitOutcome
    where
        F: FnOnce(FormSubmission<D>) -> Fut,
        Fut: Future<Output = anyhow::Result<()>>,
    {
        if !self.validate() {
            info!("{} form has {} invalid field(s)", D::ENTITY, self.errors.len());
            return SubmitOutcome::Invalid;
        }

        self.submit_error = None;
        let submission = FormSubmission {
            id: self.mode.id().map(str::to_string),
            draft: self.draft.clone(),
        };

        let result = handler(submission).await;

        match result {
            Ok(()) => SubmitOutcome::Submitted,
            Err(e) => {
                error!("Failed to save {}: {:#}", D::ENTITY, e);
                let message = e.to_string();
                self.submit_error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }
}

/// One message per field; a `required` error wins over format errors.
fn collect_errors(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, list)| {
            let chosen = list
                .iter()
                .find(|e| e.code == "required")
                .or_else(|| list.first())?;
            let message = chosen
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value ({})", chosen.code));
            Some((field.to_string(), message))
        })
        .collect()
}
