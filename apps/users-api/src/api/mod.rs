use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use domain_users::{PgUserRepository, UserService, handlers};

pub mod health;

/// Domain routes, stateless (sub-routers have their state applied).
///
/// The configured error status mode wraps these routes only.
pub fn routes(state: &crate::state::AppState) -> Router {
    let repository = PgUserRepository::new(state.db.clone());
    let service = UserService::new(repository);

    let routes = Router::new().nest(handlers::BASE_PATH, handlers::router(Arc::new(service)));
    state.config.error_status_mode.apply(routes)
}

/// `/ready`, backed by a real database round trip.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
