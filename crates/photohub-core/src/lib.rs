//! # photohub-core
//!
//! Core crate for PhotoHub. Contains configuration schemas, typed
//! identifiers, pagination types, the shared repository and ownership
//! traits, and the unified error system.
//!
//! This crate has **no** internal dependencies on other PhotoHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
