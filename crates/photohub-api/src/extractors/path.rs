//! Typed path parameter helpers.

use std::str::FromStr;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use photohub_core::error::AppError;

use crate::error::ApiError;

/// A single `{id}` path segment parsed into a typed id.
#[derive(Debug, Clone, Copy)]
pub struct IdPath<T>(pub T);

impl<T, S> FromRequestParts<S> for IdPath<T>
where
    T: FromStr + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::validation("Missing id in path"))?;
        Ok(Self(parse_id(&raw)?))
    }
}

/// Parses an integer id from a path segment.
pub fn parse_id<T: FromStr>(s: &str) -> Result<T, AppError> {
    s.parse()
        .map_err(|_| AppError::validation(format!("Invalid id: {s}")))
}

#[cfg(test)]
mod tests {
    use photohub_core::types::id::PhotoId;

    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id::<PhotoId>("12").unwrap(), PhotoId::new(12));
        let err = parse_id::<PhotoId>("abc").unwrap_err();
        assert_eq!(err.message, "Invalid id: abc");
    }
}
