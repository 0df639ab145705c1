//! JSON body extractor with uniform 400 rejections.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Like [`axum::Json`], but every decode failure (missing content type,
/// syntax error, wrong shape) is reported as [`AppError::JsonExtractorRejection`],
/// which always answers 400.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::post};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        name: String,
    }

    async fn post_body(content_type: Option<&str>, body: &'static str) -> StatusCode {
        let app = Router::new().route(
            "/",
            post(|JsonBody(p): JsonBody<Payload>| async move { p.name }),
        );
        let mut request = Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            request = request.header("content-type", ct);
        }
        app.oneshot(request.body(Body::from(body)).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_accepts_valid_json() {
        assert_eq!(
            post_body(Some("application/json"), r#"{"name":"a"}"#).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_every_rejection_is_bad_request() {
        // axum would answer 415 and 422 for these two.
        assert_eq!(post_body(None, r#"{"name":"a"}"#).await, StatusCode::BAD_REQUEST);
        assert_eq!(
            post_body(Some("application/json"), r#"{"name":1}"#).await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            post_body(Some("application/json"), "{not json").await,
            StatusCode::BAD_REQUEST
        );
    }
}
