//! # photohub-auth
//!
//! Authentication and request authorization for PhotoHub.
//!
//! ## Modules
//!
//! - `jwt` — asymmetric key loading, session token issue and validation
//! - `password` — Argon2id password hashing and length policy
//! - `authenticator` — token → user resolution run on every protected request
//! - `ownership` — the single "only the owner may mutate" rule

pub mod authenticator;
pub mod jwt;
pub mod ownership;
pub mod password;

#[cfg(test)]
pub(crate) mod test_keys;

pub use authenticator::Authenticator;
pub use jwt::{Claims, SessionTokens, SigningKey, TokenError, TokenService, VerificationKey};
pub use ownership::ensure_owner;
pub use password::{PasswordHasher, PasswordValidator};
