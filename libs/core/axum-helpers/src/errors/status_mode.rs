//! How error kinds are reported as HTTP status codes.

use axum::{Router, http::StatusCode, middleware, response::Response};
use std::str::FromStr;

/// `Typed` reports each error kind with its own status. `Legacy` answers
/// every failed request with 400 Bad Request, keeping the JSON body as is,
/// for clients written against services that did the same.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorStatusMode {
    #[default]
    Typed,
    Legacy,
}

impl ErrorStatusMode {
    /// Apply the mode to a router's responses.
    pub fn apply<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        match self {
            ErrorStatusMode::Typed => router,
            ErrorStatusMode::Legacy => {
                router.layer(middleware::map_response(collapse_to_bad_request))
            }
        }
    }
}

impl FromStr for ErrorStatusMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "typed" => Ok(ErrorStatusMode::Typed),
            "legacy" => Ok(ErrorStatusMode::Legacy),
            other => Err(format!(
                "unknown error status mode '{other}', expected 'typed' or 'legacy'"
            )),
        }
    }
}

async fn collapse_to_bad_request(mut response: Response) -> Response {
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        *response.status_mut() = StatusCode::BAD_REQUEST;
    }
    response
}
