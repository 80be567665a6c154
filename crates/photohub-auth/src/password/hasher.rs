//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use photohub_core::config::Argon2Config;
use photohub_core::error::{AppError, ErrorKind};

/// Handles password hashing and verification using Argon2id.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Creates a hasher with the configured cost factors.
    pub fn new(config: &Argon2Config) -> Result<Self, AppError> {
        let params = Params::new(config.memory_kib, config.iterations, config.parallelism, None)
            .map_err(|e| AppError::configuration(format!("Invalid argon2 parameters: {e}")))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a plaintext password with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::hashing(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored PHC digest.
    ///
    /// Returns `Ok(false)` on mismatch. A digest that cannot be parsed is
    /// an error, not a mismatch. Parameters are read from the digest, so
    /// hashes made under older cost factors still verify.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            AppError::new(ErrorKind::Hashing, format!("Stored password hash is malformed: {e}"))
        })?;

        match self.argon2().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::hashing(format!("Password verification failed: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(&Argon2Config {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = hasher();
        let hash = hasher.hash_password("secret1").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify_password("secret1", &hash).unwrap());
        assert!(!hasher.verify_password("secret2", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ() {
        let hasher = hasher();
        let first = hasher.hash_password("same-password").unwrap();
        let second = hasher.hash_password("same-password").unwrap();
        assert_ne!(first, second);
        assert!(hasher.verify_password("same-password", &second).unwrap());
    }

    #[test]
    fn test_malformed_digest_is_an_error() {
        let err = hasher().verify_password("secret1", "not-a-phc-string").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Hashing);
    }

    #[test]
    fn test_invalid_params_are_rejected() {
        let result = PasswordHasher::new(&Argon2Config {
            memory_kib: 1,
            iterations: 0,
            parallelism: 1,
        });
        assert!(result.is_err());
    }
}
