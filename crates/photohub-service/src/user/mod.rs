//! Self-service account management.

pub mod service;

pub use service::{UpdateProfileInput, UserService};
