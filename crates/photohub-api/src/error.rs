//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use photohub_core::error::{AppError, ErrorKind};

/// Message returned in place of any server-side failure.
const GENERIC_FAILURE: &str = "Something went wrong, please try again later";

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// `fail` for caller mistakes, `error` for server faults.
    pub status: String,
    /// Human-readable message.
    pub message: String,
}

/// HTTP-facing wrapper so `AppError` can be returned from handlers.
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Handler result type.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Status code for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Hashing => StatusCode::BAD_GATEWAY,
        ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);

        let body = if err.kind.is_client_error() {
            ApiErrorResponse {
                status: "fail".to_string(),
                message: err.message,
            }
        } else {
            tracing::error!(kind = %err.kind, error = ?err, "Request failed");
            ApiErrorResponse {
                status: "error".to_string(),
                message: GENERIC_FAILURE.to_string(),
            }
        };

        (status, Json(body)).into_response()
    }
}
