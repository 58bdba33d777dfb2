use serde::Deserialize;

use crate::domain::{AdditionalInfo, ApiError, TransactionStatus, VerifyInfo};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct JsonStatus {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub updated_on: String,
    #[serde(default)]
    pub description: String,
}

impl From<JsonStatus> for TransactionStatus {
    fn from(value: JsonStatus) -> Self {
        Self {
            code: value.code,
            updated_on: value.updated_on,
            description: value.description,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct JsonError {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub description: String,
}

impl From<JsonError> for ApiError {
    fn from(value: JsonError) -> Self {
        Self {
            code: value.code,
            description: value.description,
        }
    }
}

pub(crate) fn map_errors(errors: Vec<JsonError>) -> Vec<ApiError> {
    errors.into_iter().map(ApiError::from).collect()
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct JsonAdditionalInfo {
    #[serde(default)]
    pub code_entered: Option<String>,
    #[serde(default)]
    pub message_parts_count: Option<i32>,
}

impl From<JsonAdditionalInfo> for AdditionalInfo {
    fn from(value: JsonAdditionalInfo) -> Self {
        Self {
            code_entered: value.code_entered,
            message_parts_count: value.message_parts_count,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct JsonVerify {
    #[serde(default)]
    pub code_state: Option<String>,
    #[serde(default)]
    pub code_entered: Option<String>,
}

impl From<JsonVerify> for VerifyInfo {
    fn from(value: JsonVerify) -> Self {
        Self {
            code_state: value.code_state,
            code_entered: value.code_entered,
        }
    }
}
