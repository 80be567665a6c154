//! Fixture key pairs shared by unit tests.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use photohub_core::config::{Argon2Config, AuthConfig};

pub const ACCESS_PRIVATE: &str = include_str!("../../../tests/fixtures/keys/access_private.pem");
pub const ACCESS_PUBLIC: &str = include_str!("../../../tests/fixtures/keys/access_public.pem");
pub const REFRESH_PRIVATE: &str = include_str!("../../../tests/fixtures/keys/refresh_private.pem");
pub const REFRESH_PUBLIC: &str = include_str!("../../../tests/fixtures/keys/refresh_public.pem");
pub const RSA_PRIVATE: &str = include_str!("../../../tests/fixtures/keys/rsa_private.pem");
pub const RSA_PUBLIC: &str = include_str!("../../../tests/fixtures/keys/rsa_public.pem");

pub fn b64(pem: &str) -> String {
    STANDARD.encode(pem)
}

/// Auth settings with the Ed25519 fixture keys and cheap hashing.
pub fn auth_config() -> AuthConfig {
    AuthConfig {
        algorithm: "EdDSA".to_string(),
        access_token_private_key: b64(ACCESS_PRIVATE),
        access_token_public_key: b64(ACCESS_PUBLIC),
        refresh_token_private_key: b64(REFRESH_PRIVATE),
        refresh_token_public_key: b64(REFRESH_PUBLIC),
        access_token_ttl_minutes: 15,
        refresh_token_ttl_minutes: 60,
        cookie_domain: "localhost".to_string(),
        cookie_secure: false,
        password_min_length: 6,
        argon2: Argon2Config {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        },
    }
}
