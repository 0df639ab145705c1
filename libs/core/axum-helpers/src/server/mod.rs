//! Server bootstrap: router assembly, health endpoints, graceful shutdown
//! and connection cleanup.
//!
//! ```ignore
//! let router = create_router::<ApiDoc>(api_routes).merge(health_router(app_info!()));
//! create_production_app(router, &config.server, Duration::from_secs(30), async move {
//!     close_postgres(db, "users").await;
//! })
//! .await?;
//! ```

pub mod app;
pub mod cleanup;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use cleanup::close_postgres;
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::shutdown_signal;
