// ============================================================================
// SSO Core - Multi Value Input
// File: crates/sso-core/src/forms/multi_value.rs
// Description: Ordered, de-duplicated list editor (redirect URIs, scopes...)
// ============================================================================

use serde::Serialize;

/// Tag-style input: the operator types into `pending` and commits.
///
/// Serializes as the committed values only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MultiValueInput {
    values: Vec<String>,
    #[serde(skip)]
    pending: String,
}

impl MultiValueInput {
    pub fn new(values: impl IntoIterator<Item = String>) -> Self {
        let mut input = Self::default();
        for value in values {
            input.push(&value);
        }
        input
    }

    /// Split on commas, whitespace and newlines.
    pub fn parse_delimited(raw: &str) -> Self {
        Self::new(
            raw.split(|c: char| c == ',' || c.is_whitespace())
                .map(str::to_string),
        )
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn into_values(self) -> Vec<String> {
        self.values
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Add a trimmed value. Blank and duplicate values are refused.
    pub fn push(&mut self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || self.values.iter().any(|v| v == value) {
            return false;
        }
        self.values.push(value.to_string());
        true
    }

    /// Move the pending text into the list; the buffer is cleared only when
    /// the value was accepted.
    pub fn commit(&mut self) -> bool {
        let pending = std::mem::take(&mut self.pending);
        if self.push(&pending) {
            true
        } else {
            self.pending = pending;
            false
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.values.len()).then(|| self.values.remove(index))
    }

    pub fn remove_value(&mut self, value: &str) -> bool {
        let before = self.values.len();
        self.values.retain(|v| v != value);
        self.values.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}
