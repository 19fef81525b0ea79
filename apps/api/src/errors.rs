use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Error bodies are flat: `{"error": "..."}`, plus `"details"` when the
/// failure carries a cause the caller is allowed to see.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("LLM error: {message}")]
    Llm {
        message: String,
        details: Option<String>,
    },
}

impl AppError {
    /// Generation failure reported without the underlying cause.
    pub fn llm(message: impl Into<String>) -> Self {
        AppError::Llm {
            message: message.into(),
            details: None,
        }
    }

    /// Generation failure reported together with the underlying cause.
    pub fn llm_with_details(message: impl Into<String>, details: impl ToString) -> Self {
        AppError::Llm {
            message: message.into(),
            details: Some(details.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::Llm { message, details } => {
                tracing::error!(
                    "LLM error: {message}{}",
                    details
                        .as_deref()
                        .map(|d| format!(" ({d})"))
                        .unwrap_or_default()
                );
                (StatusCode::INTERNAL_SERVER_ERROR, message, details)
            }
        };

        let body = match details {
            Some(details) => json!({ "error": message, "details": details }),
            None => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}
