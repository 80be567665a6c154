//! Pagination query parameter extractor.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use photohub_core::error::AppError;
use photohub_core::types::pagination::PageRequest;

use crate::error::ApiError;

/// `?page=&limit=`, defaulted and clamped.
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageRequest);

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(request) = Query::<PageRequest>::try_from_uri(&parts.uri)
            .map_err(|_| AppError::validation("page and limit must be positive integers"))?;
        Ok(Self(request.normalized()))
    }
}
