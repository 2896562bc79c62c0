use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::search_client::SearchError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only `Validation` echoes its message to the client; upstream and internal
/// failures are logged and answered with a generic body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream format error: {0}")]
    UpstreamFormat(String),

    #[error("Upstream call error: {0}")]
    UpstreamCall(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// 400 for an absent or blank request field.
    pub fn missing_field(field: &str) -> Self {
        AppError::Validation(format!("Missing {field}"))
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Parse(_) | LlmError::EmptyContent | LlmError::Blocked(_) => {
                AppError::UpstreamFormat(err.to_string())
            }
            LlmError::Http(_) | LlmError::Api { .. } => AppError::UpstreamCall(err.to_string()),
        }
    }
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        AppError::UpstreamCall(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::UpstreamFormat(msg) => {
                tracing::error!("Upstream format error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The AI service returned an unexpected response".to_string(),
                )
            }
            AppError::UpstreamCall(msg) => {
                tracing::error!("Upstream call error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The AI service request failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
