//! Users Domain
//!
//! CRUD over a single `User` entity, split into layers that only talk through
//! traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, depend on `UserUsecase` only
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Usecase   │  ← One operation per business action
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Port (trait); Postgres and in-memory adapters
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← `User` and its invariant, wire DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use axum::Router;
//! use domain_users::{handlers, InMemoryUserRepository, UserService};
//!
//! let service = UserService::new(InMemoryUserRepository::new());
//! let app: Router = Router::new().nest("/users", handlers::router(Arc::new(service)));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod usecase;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{NAME_REQUIRED, User, UserRequest, UserResponse};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use usecase::{UserService, UserUsecase};
