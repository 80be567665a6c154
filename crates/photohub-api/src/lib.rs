//! # photohub-api
//!
//! HTTP API layer for PhotoHub built on Axum.
//!
//! Provides the REST endpoints, the `AuthUser` extractor that binds the
//! authenticator to each request, validated request DTOs, response
//! envelopes, CORS and request logging layers, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
