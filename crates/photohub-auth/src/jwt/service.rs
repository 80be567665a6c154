//! Access/refresh key pairs loaded once at startup.

use chrono::{Duration, Utc};
use tracing::info;

use photohub_core::config::AuthConfig;
use photohub_core::error::AppError;
use photohub_core::types::id::UserId;

use super::keys::{SigningKey, VerificationKey, decode_pem, parse_algorithm};
use super::token::{TokenError, issue, validate};

/// The two tokens handed out at login.
#[derive(Debug, Clone)]
pub struct SessionTokens {
    /// Short-lived token used on every request.
    pub access_token: String,
    /// Long-lived token, verifiable only with the refresh key.
    pub refresh_token: String,
    /// Access token lifetime in seconds (cookie `Max-Age`).
    pub access_max_age: i64,
    /// Refresh token lifetime in seconds (cookie `Max-Age`).
    pub refresh_max_age: i64,
}

/// Signing and verification keys for one token class.
#[derive(Debug, Clone)]
struct KeyPair {
    signing: SigningKey,
    verification: VerificationKey,
}

impl KeyPair {
    fn load(
        config: &AuthConfig,
        class: &str,
        private_b64: &str,
        public_b64: &str,
    ) -> Result<(Self, Vec<u8>), AppError> {
        let algorithm = parse_algorithm(&config.algorithm)?;
        let private_field = format!("{class}_token_private_key");
        let public_field = format!("{class}_token_public_key");

        let private_pem = decode_pem(&private_field, private_b64)?;
        let public_pem = decode_pem(&public_field, public_b64)?;

        let signing = SigningKey::from_pem(algorithm, &private_pem).map_err(|e| {
            AppError::configuration(format!("auth.{private_field} is not a valid {algorithm:?} key: {e}"))
        })?;
        let verification = VerificationKey::from_pem(algorithm, &public_pem).map_err(|e| {
            AppError::configuration(format!("auth.{public_field} is not a valid {algorithm:?} key: {e}"))
        })?;

        let pair = Self {
            signing,
            verification,
        };
        pair.probe(class)?;
        Ok((pair, public_pem))
    }

    /// Sign a throwaway token and check the public half accepts it.
    fn probe(&self, class: &str) -> Result<(), AppError> {
        let token = issue(UserId::new(0), Duration::minutes(1), &self.signing)?;
        validate(&token, &self.verification).map(|_| ()).map_err(|e| {
            AppError::configuration(format!(
                "The {class} token private and public keys do not match ({e})"
            ))
        })
    }
}

/// Parse a configured lifetime; it must be positive and representable
/// as an expiry timestamp.
fn token_ttl(class: &str, minutes: i64) -> Result<Duration, AppError> {
    let invalid = || {
        AppError::configuration(format!(
            "auth.{class}_token_ttl_minutes must be a positive number of minutes, got {minutes}"
        ))
    };
    if minutes <= 0 {
        return Err(invalid());
    }
    let ttl = Duration::try_minutes(minutes).ok_or_else(invalid)?;
    Utc::now().checked_add_signed(ttl).ok_or_else(invalid)?;
    Ok(ttl)
}

/// Issues session token pairs and validates each class with its own key.
///
/// Keys are read-only after construction; share the service behind an `Arc`.
#[derive(Debug, Clone)]
pub struct TokenService {
    access: KeyPair,
    refresh: KeyPair,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    /// Load and check both key pairs from configuration.
    ///
    /// Fails if a key does not decode, a private key does not match its
    /// public key, both token classes share one verification key, or a
    /// lifetime is not a positive, representable duration.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AppError> {
        let access_ttl = token_ttl("access", config.access_token_ttl_minutes)?;
        let refresh_ttl = token_ttl("refresh", config.refresh_token_ttl_minutes)?;

        let (access, access_public) = KeyPair::load(
            config,
            "access",
            &config.access_token_private_key,
            &config.access_token_public_key,
        )?;
        let (refresh, refresh_public) = KeyPair::load(
            config,
            "refresh",
            &config.refresh_token_private_key,
            &config.refresh_token_public_key,
        )?;

        if access_public == refresh_public {
            return Err(AppError::configuration(
                "Access and refresh tokens must use distinct key pairs",
            ));
        }

        info!(
            algorithm = %config.algorithm,
            access_ttl_minutes = config.access_token_ttl_minutes,
            refresh_ttl_minutes = config.refresh_token_ttl_minutes,
            "Token keys loaded"
        );

        Ok(Self {
            access,
            refresh,
            access_ttl,
            refresh_ttl,
        })
    }

    /// Issue an access and a refresh token for `user_id`.
    pub fn issue_session(&self, user_id: UserId) -> Result<SessionTokens, AppError> {
        Ok(SessionTokens {
            access_token: issue(user_id, self.access_ttl, &self.access.signing)?,
            refresh_token: issue(user_id, self.refresh_ttl, &self.refresh.signing)?,
            access_max_age: self.access_ttl.num_seconds(),
            refresh_max_age: self.refresh_ttl.num_seconds(),
        })
    }

    /// Validate an access token.
    pub fn validate_access(&self, token: &str) -> Result<UserId, TokenError> {
        validate(token, &self.access.verification)
    }

    /// Validate a refresh token.
    pub fn validate_refresh(&self, token: &str) -> Result<UserId, TokenError> {
        validate(token, &self.refresh.verification)
    }

    /// Key used to sign access tokens.
    pub fn access_signing_key(&self) -> &SigningKey {
        &self.access.signing
    }
}
