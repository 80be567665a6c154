//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing, session cookie and credential configuration.
///
/// Key material is supplied as base64-encoded PEM documents, one key pair
/// per token class so that an access token never verifies as a refresh
/// token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Asymmetric JWS algorithm name (`EdDSA`, `RS256`, `ES256`, ...).
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// Base64 PEM private key used to sign access tokens.
    pub access_token_private_key: String,
    /// Base64 PEM public key used to verify access tokens.
    pub access_token_public_key: String,
    /// Base64 PEM private key used to sign refresh tokens.
    pub refresh_token_private_key: String,
    /// Base64 PEM public key used to verify refresh tokens.
    pub refresh_token_public_key: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_token_ttl_minutes: i64,
    /// Refresh token TTL in minutes.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_token_ttl_minutes: i64,
    /// Domain attribute of the session cookies.
    #[serde(default = "default_cookie_domain")]
    pub cookie_domain: String,
    /// Whether session cookies carry the `Secure` attribute.
    #[serde(default)]
    pub cookie_secure: bool,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Argon2 cost factors.
    #[serde(default)]
    pub argon2: Argon2Config,
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argon2Config {
    /// Memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    /// Number of passes.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Degree of parallelism.
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

fn default_algorithm() -> String {
    "EdDSA".to_string()
}

fn default_access_ttl() -> i64 {
    15
}

fn default_refresh_ttl() -> i64 {
    60
}

fn default_cookie_domain() -> String {
    "localhost".to_string()
}

fn default_password_min() -> usize {
    6
}

// OWASP baseline for Argon2id: m=19 MiB, t=2, p=1.
fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}
