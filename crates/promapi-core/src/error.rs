//! Shared error type across promapi crates.

use thiserror::Error;

/// Prometheus API `errorType` values (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Invalid input or configuration.
    BadData,
    /// Internal server error.
    Internal,
    /// Dependency not available.
    Unavailable,
    /// Unknown resource.
    NotFound,
}

impl ErrorType {
    /// String representation used in the `errorType` JSON field.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorType::BadData => "bad_data",
            ErrorType::Internal => "internal",
            ErrorType::Unavailable => "unavailable",
            ErrorType::NotFound => "not_found",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PromApiError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum PromApiError {
    #[error("bad data: {0}")]
    BadData(String),
    #[error("internal: {0}")]
    Internal(String),
    #[error("unavailable: {0}")]
    Unavailable(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("process has no invocation path")]
    NoInvocationPath,
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl PromApiError {
    /// Map internal error to a stable Prometheus `errorType`.
    pub fn error_type(&self) -> ErrorType {
        match self {
            PromApiError::BadData(_) => ErrorType::BadData,
            PromApiError::Internal(_) => ErrorType::Internal,
            PromApiError::Unavailable(_) => ErrorType::Unavailable,
            PromApiError::NotFound(_) => ErrorType::NotFound,
            PromApiError::NoInvocationPath | PromApiError::Io(_) => ErrorType::Internal,
        }
    }
}
