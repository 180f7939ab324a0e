//! `AppError` and the JSON body it renders to

use super::codes::ErrorCode;
use crate::hours::HoursParseError;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Error crossing the HTTP boundary: a code, a message and optional
/// structured details (offending token, file path, restaurant name).
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// `{field} parameter is required`
    pub fn required(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::with_message(
            ErrorCode::RequiredField,
            format!("{} parameter is required", field),
        )
        .with_detail("field", field)
    }

    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidFormat, msg)
    }

    pub fn restaurant_not_found(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::with_message(
            ErrorCode::RestaurantNotFound,
            format!("Restaurant '{}' not found", name),
        )
        .with_detail("name", name)
    }

    pub fn invalid_record(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRestaurantRecord, msg)
    }

    pub fn data_load(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DataLoadFailed, msg)
    }
}

impl From<HoursParseError> for AppError {
    fn from(err: HoursParseError) -> Self {
        let code = match &err {
            HoursParseError::UnknownWeekday { .. } => ErrorCode::UnknownWeekday,
            HoursParseError::InvalidTime { .. } => ErrorCode::InvalidTime,
        };
        Self::with_message(code, err.to_string()).with_detail("token", err.token())
    }
}

/// Body of every error response
///
/// ```json
/// { "code": 6, "message": "Invalid format, ...", "details": { "datetime": "tomorrow" } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code,
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(code = %self.code, message = %self.message, "System error");
        }

        (self.http_status(), axum::Json(ErrorResponse::from(&self))).into_response()
    }
}
