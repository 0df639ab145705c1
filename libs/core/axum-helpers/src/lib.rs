//! # Axum Helpers
//!
//! HTTP plumbing shared by the service binaries.
//!
//! - **[`errors`]**: `AppError`, the JSON `ErrorResponse` body, error codes
//!   and the typed/legacy status mode
//! - **[`extractors`]**: `IdPath` and `JsonBody`, both rejecting with `AppError`
//! - **[`server`]**: router assembly, health endpoints, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, close_postgres, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

pub use errors::{AppError, ErrorCode, ErrorResponse, ErrorStatusMode};

pub use extractors::{IdPath, JsonBody};
