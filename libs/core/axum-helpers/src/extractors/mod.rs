//! Custom extractors for Axum handlers.
//!
//! Both map their rejections onto [`AppError`](crate::errors::AppError) so a
//! malformed request gets the same JSON error body as any other failure.

pub mod id_path;
pub mod json_body;

pub use id_path::IdPath;
pub use json_body::JsonBody;
