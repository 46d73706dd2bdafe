//! Response envelope
//!
//! `{code: number, msg: string, data: T}`. Any code other than 200 is an
//! error regardless of the HTTP status.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use sso_shared::constants::ENVELOPE_SUCCESS_CODE;

use crate::error::ClientError;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Value,
}

impl ApiEnvelope {
    pub fn is_success(&self) -> bool {
        self.code == ENVELOPE_SUCCESS_CODE
    }

    /// Unwrap `data` as `T`. A missing or null `data` decodes as `()` or `None`.
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        if !self.is_success() {
            return Err(ClientError::Envelope { code: self.code, msg: self.msg });
        }
        Ok(serde_json::from_value(self.data)?)
    }
}

pub fn parse<T: DeserializeOwned>(body: &[u8]) -> Result<T, ClientError> {
    let envelope: ApiEnvelope = serde_json::from_slice(body)?;
    envelope.into_data()
}

/// Affected-row count of a delete. Backends answer with a number, a
/// boolean or nothing at all.
pub fn affected_count(data: &Value) -> u64 {
    match data {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::Bool(true) => 1,
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
