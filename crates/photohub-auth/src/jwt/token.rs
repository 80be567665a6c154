//! Stateless token issue and validation.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Header, Validation, decode, encode};
use thiserror::Error;

use photohub_core::error::{AppError, ErrorKind};
use photohub_core::types::id::UserId;

use super::claims::Claims;
use super::keys::{SigningKey, VerificationKey};

/// Why a token was refused. Kept internal: callers outside the auth
/// layer only ever see a uniform `Unauthorized`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token is not a decodable JWT or its claims are unusable.
    #[error("malformed token: {0}")]
    Malformed(String),
    /// The signature does not verify against the verification key.
    #[error("invalid token signature")]
    InvalidSignature,
    /// `exp` is not in the future.
    #[error("token expired")]
    Expired,
}

/// Sign `{sub, iat: now, exp: now + ttl}` with `key`.
///
/// A negative `ttl` produces a token that is already expired.
pub fn issue(user_id: UserId, ttl: Duration, key: &SigningKey) -> Result<String, AppError> {
    let now = Utc::now();
    let expires_at = now
        .checked_add_signed(ttl)
        .ok_or_else(|| AppError::internal(format!("Token lifetime {ttl} is out of range")))?;
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    encode(&Header::new(key.algorithm), &claims, &key.key).map_err(|e| {
        AppError::with_source(ErrorKind::Internal, "Failed to sign session token", e)
    })
}

/// Verify `token` against `key` and return its subject.
///
/// Signature failures take precedence over expiry. No store access.
pub fn validate(token: &str, key: &VerificationKey) -> Result<UserId, TokenError> {
    let mut validation = Validation::new(key.algorithm);
    // Expiry is checked below with no leeway so it can be reported distinctly.
    validation.validate_exp = false;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<Claims>(token, &key.key, &validation).map_err(|e| match e.kind() {
        JwtErrorKind::InvalidSignature | JwtErrorKind::InvalidAlgorithm => {
            TokenError::InvalidSignature
        }
        JwtErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed(e.to_string()),
    })?;

    if data.claims.exp <= Utc::now().timestamp() {
        return Err(TokenError::Expired);
    }

    data.claims
        .sub
        .parse::<UserId>()
        .map_err(|_| TokenError::Malformed(format!("subject '{}' is not a user id", data.claims.sub)))
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::Algorithm;

    use super::*;
    use crate::test_keys::{
        ACCESS_PRIVATE, ACCESS_PUBLIC, REFRESH_PUBLIC, RSA_PRIVATE, RSA_PUBLIC,
    };

    fn signing(pem: &str) -> SigningKey {
        SigningKey::from_pem(Algorithm::EdDSA, pem.as_bytes()).unwrap()
    }

    fn verification(pem: &str) -> VerificationKey {
        VerificationKey::from_pem(Algorithm::EdDSA, pem.as_bytes()).unwrap()
    }

    #[test]
    fn test_issue_then_validate_returns_subject() {
        let token = issue(UserId::new(42), Duration::minutes(15), &signing(ACCESS_PRIVATE)).unwrap();
        assert_eq!(validate(&token, &verification(ACCESS_PUBLIC)), Ok(UserId::new(42)));
    }

    #[test]
    fn test_negative_ttl_is_expired() {
        let token = issue(UserId::new(1), Duration::seconds(-1), &signing(ACCESS_PRIVATE)).unwrap();
        assert_eq!(validate(&token, &verification(ACCESS_PUBLIC)), Err(TokenError::Expired));
    }

    #[test]
    fn test_out_of_range_ttl_is_an_error() {
        let err = issue(UserId::new(1), Duration::MAX, &signing(ACCESS_PRIVATE)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);
    }

    #[test]
    fn test_wrong_key_class_is_invalid_signature() {
        let token = issue(UserId::new(1), Duration::minutes(5), &signing(ACCESS_PRIVATE)).unwrap();
        assert_eq!(
            validate(&token, &verification(REFRESH_PUBLIC)),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_signature_failure_wins_over_expiry() {
        let token = issue(UserId::new(1), Duration::seconds(-60), &signing(ACCESS_PRIVATE)).unwrap();
        assert_eq!(
            validate(&token, &verification(REFRESH_PUBLIC)),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_garbage_is_malformed() {
        let key = verification(ACCESS_PUBLIC);
        assert!(matches!(validate("not-a-token", &key), Err(TokenError::Malformed(_))));
        assert!(matches!(validate("", &key), Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_tampered_payload_fails_signature() {
        let token = issue(UserId::new(1), Duration::minutes(5), &signing(ACCESS_PRIVATE)).unwrap();
        let other = issue(UserId::new(2), Duration::minutes(5), &signing(ACCESS_PRIVATE)).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        parts[1] = other_parts[1];
        assert_eq!(
            validate(&parts.join("."), &verification(ACCESS_PUBLIC)),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_rsa_round_trip() {
        let signing = SigningKey::from_pem(Algorithm::RS256, RSA_PRIVATE.as_bytes()).unwrap();
        let verification = VerificationKey::from_pem(Algorithm::RS256, RSA_PUBLIC.as_bytes()).unwrap();
        let token = issue(UserId::new(9), Duration::minutes(1), &signing).unwrap();
        assert_eq!(validate(&token, &verification), Ok(UserId::new(9)));
    }

    #[test]
    fn test_algorithm_mismatch_is_rejected() {
        let rsa = SigningKey::from_pem(Algorithm::RS256, RSA_PRIVATE.as_bytes()).unwrap();
        let token = issue(UserId::new(9), Duration::minutes(1), &rsa).unwrap();
        assert_eq!(
            validate(&token, &verification(ACCESS_PUBLIC)),
            Err(TokenError::InvalidSignature)
        );
    }
}
