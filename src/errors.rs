use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Failure while decoding a forecast document.
///
/// Both variants are terminal for the call: nothing is retried and no
/// partial value is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtractError {
    /// The document is not valid JSON, or a required field is missing or has
    /// the wrong shape.
    #[error("Malformed forecast document: {0}")]
    MalformedDocument(String),

    /// The document is fine but has no entry at the requested position.
    #[error("Day index {index} out of range for forecast with {len} day(s)")]
    IndexOutOfRange { index: usize, len: usize },
}

impl From<serde_json::Error> for ExtractError {
    fn from(err: serde_json::Error) -> Self {
        ExtractError::MalformedDocument(err.to_string())
    }
}

/// Invalid service configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?} ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Standard error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable document: {0}")]
    Unprocessable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
        };

        tracing::debug!("Rejecting request ({}): {}", status, message);

        (status, axum::Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::MalformedDocument(_) => AppError::Unprocessable(err.to_string()),
            ExtractError::IndexOutOfRange { .. } => AppError::NotFound(err.to_string()),
        }
    }
}
