pub mod codes;
pub mod handlers;
pub mod responses;
pub mod status_mode;

pub use codes::ErrorCode;
pub use status_mode::ErrorStatusMode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Body of every error response.
///
/// ```json
/// { "code": 1004, "error": "NOT_FOUND", "message": "user 7 not found" }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Transport-level error returned by handlers.
///
/// Domain crates convert their own error enums into this type; it owns the
/// mapping to status codes and the JSON body.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            // Any body that does not decode is the client's fault, whatever
            // axum's own rejection status would have been.
            AppError::JsonExtractorRejection(_)
            | AppError::Validation(_)
            | AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::JsonExtractorRejection(_) => ErrorCode::JsonExtraction,
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::InvalidId(_) => ErrorCode::InvalidId,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        let message = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(error_code = code.code(), "JSON extraction error: {:?}", e);
                e.body_text()
            }
            AppError::Validation(msg) | AppError::InvalidId(msg) => {
                tracing::info!(error_code = code.code(), "{}: {}", code, msg);
                msg
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                msg
            }
            AppError::InternalServerError(msg) => {
                // Storage details stay in the logs.
                tracing::error!(error_code = code.code(), "Internal server error: {}", msg);
                code.default_message().to_string()
            }
        };

        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}

/// Build an error response outside of the [`AppError`] flow.
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    (status, Json(ErrorResponse::new(error_code, message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let response = AppError::NotFound("user 7 not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_of(response).await;
        assert_eq!(body.error, "NOT_FOUND");
        assert_eq!(body.code, 1004);
        assert_eq!(body.message, "user 7 not found");
        assert!(body.details.is_none());
    }

    #[tokio::test]
    async fn test_internal_error_hides_message() {
        let response = AppError::InternalServerError("connection refused (os error 111)".into())
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert_eq!(body.error, "INTERNAL_ERROR");
        assert!(!body.message.contains("connection refused"));
    }

    #[test]
    fn test_client_errors_are_bad_request() {
        assert_eq!(AppError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidId("x".into()).status(), StatusCode::BAD_REQUEST);
    }
}
