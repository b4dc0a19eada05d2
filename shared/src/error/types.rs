//! `AppError` and the JSON error body sent to clients

use std::collections::BTreeMap;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::category::ErrorCategory;
use super::codes::ErrorCode;

/// Structured context attached to an error (`field`, `id`, `tableNumber`...)
pub type ErrorDetails = BTreeMap<String, Value>;

/// Error returned by every handler
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<ErrorDetails>,
}

impl AppError {
    /// Error with the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// `"{resource} not found"`, with the resource repeated in the details
    pub fn not_found(resource: impl Into<String>) -> Self {
        let resource = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", resource))
            .with_detail("resource", resource)
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::AlreadyExists, msg)
    }

    /// Reading or writing a data file failed
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageError, msg)
    }

    /// A data file exists but does not hold the expected JSON
    pub fn storage_corrupted(file: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        let file = file.into();
        Self::with_message(
            ErrorCode::StorageCorrupted,
            format!("{} is not valid: {}", file, reason),
        )
        .with_detail("file", file)
    }

    pub fn table_not_found(id: i64) -> Self {
        Self::with_message(ErrorCode::TableNotFound, format!("Table {} not found", id))
            .with_detail("id", id)
    }

    pub fn table_number_taken(table_number: u32) -> Self {
        Self::with_message(
            ErrorCode::TableNumberTaken,
            format!("Table number {} is already in use", table_number),
        )
        .with_detail("tableNumber", table_number)
    }

    pub fn task_not_found(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::with_message(ErrorCode::TaskNotFound, format!("Task {} not found", id))
            .with_detail("id", id)
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Body of every non-2xx response
///
/// ```json
/// { "code": 7002, "message": "Table number 3 is already in use", "details": { "tableNumber": 3 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

impl ErrorBody {
    /// The code as an [`ErrorCode`], `Unknown` for codes this build does not know
    pub fn error_code(&self) -> ErrorCode {
        ErrorCode::try_from(self.code).unwrap_or(ErrorCode::Unknown)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.http_status();
        match self.code.category() {
            ErrorCategory::System => {
                tracing::error!(code = %self.code, message = %self.message, "System error occurred")
            }
            _ => tracing::debug!(code = %self.code, message = %self.message, "Request rejected"),
        }
        (status, axum::Json(ErrorBody::from(&self))).into_response()
    }
}
