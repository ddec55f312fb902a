//! Response writer: wraps payloads in the Prometheus envelope and records one
//! counter sample per response.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use promapi_core::{ApiEnvelope, PromApiError};

use crate::obs::metrics::ApiMetrics;

const ENCODE_FAILED_BODY: &str =
    r#"{"status":"error","errorType":"internal","error":"failed to encode response"}"#;

#[derive(Clone)]
pub struct ResponseWriter {
    metrics: Arc<ApiMetrics>,
}

impl ResponseWriter {
    pub fn new(metrics: Arc<ApiMetrics>) -> Self {
        Self { metrics }
    }

    /// `path` is the logical endpoint used for logs and metrics, not the
    /// concrete request URI.
    pub fn success<T: Serialize>(&self, status: StatusCode, path: &str, data: T) -> Response {
        self.write(status, path, &ApiEnvelope::success(data))
    }

    pub fn error(&self, status: StatusCode, path: &str, err: &PromApiError) -> Response {
        self.write(status, path, &ApiEnvelope::from(err))
    }

    fn write<T: Serialize>(
        &self,
        status: StatusCode,
        path: &str,
        envelope: &ApiEnvelope<T>,
    ) -> Response {
        match envelope.to_vec() {
            Ok(body) => {
                tracing::debug!(path = %path, status = status.as_u16(), "api response");
                self.metrics.record_response(path, status.as_u16());
                json_response(status, Body::from(body))
            }
            Err(e) => {
                tracing::error!(path = %path, error = %e, "failed to encode api response");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                self.metrics.record_response(path, status.as_u16());
                json_response(status, Body::from(ENCODE_FAILED_BODY))
            }
        }
    }
}

fn json_response(status: StatusCode, body: Body) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
