//! Client errors

use sso_core::DomainError;
use sso_shared::constants::GENERIC_FAILURE_MESSAGE;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("API error {code}: {msg}")]
    Envelope { code: i64, msg: String },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No CSRF token available for a mutating request")]
    MissingCsrfToken,

    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Text shown to the operator. Only envelope errors carry a server
    /// message; everything else collapses to the generic failure text.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Envelope { msg, .. } if !msg.trim().is_empty() => msg.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<ClientError> for DomainError {
    fn from(err: ClientError) -> Self {
        DomainError::MenuSourceError(err.user_message())
    }
}
