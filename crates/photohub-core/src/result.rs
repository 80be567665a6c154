//! Convenience result type alias for PhotoHub.

use crate::error::AppError;

/// A specialized `Result` type for PhotoHub operations.
pub type AppResult<T> = Result<T, AppError>;
