//! Domain errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown menu type: {0}")]
    UnknownMenuType(u8),

    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidFieldValue { field: String, message: String },

    /// The menu service could not be reached or rejected the request. The
    /// payload is the message to show to the operator.
    #[error("{0}")]
    MenuSourceError(String),
}

impl DomainError {
    pub fn invalid_value(field: &str, message: impl Into<String>) -> Self {
        DomainError::InvalidFieldValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
