//! Application state shared by the readiness endpoint and shutdown cleanup.

use database::postgres::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: DatabaseConnection,
}
