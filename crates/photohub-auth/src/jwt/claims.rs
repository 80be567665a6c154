//! JWT claims carried by access and refresh tokens.

use serde::{Deserialize, Serialize};

/// The identity claim set. Both token classes carry the same shape; they
/// differ only in the key pair that signs them and in `exp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the user id as a decimal string.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
