//! Loading signing and verification keys from base64-encoded PEM.

use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};

use photohub_core::error::AppError;

/// Parse an algorithm name and reject symmetric (HMAC) algorithms.
pub fn parse_algorithm(name: &str) -> Result<Algorithm, AppError> {
    let algorithm = Algorithm::from_str(name)
        .map_err(|_| AppError::configuration(format!("Unknown JWT algorithm '{name}'")))?;
    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Err(AppError::configuration(
            format!("JWT algorithm '{name}' is symmetric; an asymmetric algorithm is required"),
        )),
        other => Ok(other),
    }
}

/// Decode a base64 configuration value into PEM bytes.
pub fn decode_pem(field: &str, value: &str) -> Result<Vec<u8>, AppError> {
    STANDARD
        .decode(value.trim())
        .map_err(|e| AppError::configuration(format!("auth.{field} is not valid base64: {e}")))
}

/// Private key that signs one token class.
#[derive(Clone)]
pub struct SigningKey {
    pub(crate) key: EncodingKey,
    pub(crate) algorithm: Algorithm,
}

impl SigningKey {
    /// Build a signing key from a PEM document.
    pub fn from_pem(algorithm: Algorithm, pem: &[u8]) -> Result<Self, jsonwebtoken::errors::Error> {
        let key = match algorithm {
            Algorithm::EdDSA => EncodingKey::from_ed_pem(pem)?,
            Algorithm::ES256 | Algorithm::ES384 => EncodingKey::from_ec_pem(pem)?,
            _ => EncodingKey::from_rsa_pem(pem)?,
        };
        Ok(Self { key, algorithm })
    }

    /// The algorithm tokens are signed with.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

/// Public key that verifies one token class.
#[derive(Clone)]
pub struct VerificationKey {
    pub(crate) key: DecodingKey,
    pub(crate) algorithm: Algorithm,
}

impl VerificationKey {
    /// Build a verification key from a PEM document.
    pub fn from_pem(algorithm: Algorithm, pem: &[u8]) -> Result<Self, jsonwebtoken::errors::Error> {
        let key = match algorithm {
            Algorithm::EdDSA => DecodingKey::from_ed_pem(pem)?,
            Algorithm::ES256 | Algorithm::ES384 => DecodingKey::from_ec_pem(pem)?,
            _ => DecodingKey::from_rsa_pem(pem)?,
        };
        Ok(Self { key, algorithm })
    }

    /// The algorithm accepted when verifying.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

impl std::fmt::Debug for VerificationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationKey")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}
