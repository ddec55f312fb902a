//! Prometheus HTTP API response envelope.
//!
//! Every `/api/v1` response is wrapped as either
//! `{"status":"success","data":...}` or
//! `{"status":"error","errorType":...,"error":...}`.

use serde::Serialize;

use crate::error::{ErrorType, PromApiError};

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiEnvelope<T> {
    Success {
        data: T,
    },
    Error {
        #[serde(rename = "errorType")]
        error_type: &'static str,
        error: String,
    },
}

impl<T: Serialize> ApiEnvelope<T> {
    pub fn success(data: T) -> Self {
        ApiEnvelope::Success { data }
    }

    pub fn error(error_type: ErrorType, message: impl Into<String>) -> Self {
        ApiEnvelope::Error {
            error_type: error_type.as_str(),
            error: message.into(),
        }
    }

    /// Serialize to the JSON wire form.
    pub fn to_vec(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

impl From<&PromApiError> for ApiEnvelope<()> {
    fn from(err: &PromApiError) -> Self {
        ApiEnvelope::error(err.error_type(), err.to_string())
    }
}
