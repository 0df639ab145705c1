use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Failures of the users domain.
///
/// The use-case layer passes these through untouched; only the HTTP layer
/// decides what they look like on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    /// A domain rule rejected the input.
    #[error("{0}")]
    Validation(String),

    #[error("user {0} not found")]
    NotFound(i64),

    /// Any other persistence failure.
    #[error("storage error: {0}")]
    Storage(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validation(msg) => AppError::Validation(msg),
            err @ UserError::NotFound(_) => AppError::NotFound(err.to_string()),
            UserError::Storage(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_per_kind() {
        let status = |e: UserError| e.into_response().status();
        assert_eq!(
            status(UserError::Validation("name is required".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status(UserError::NotFound(4)), StatusCode::NOT_FOUND);
        assert_eq!(
            status(UserError::Storage("pool closed".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
