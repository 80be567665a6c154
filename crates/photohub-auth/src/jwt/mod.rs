//! Session token issue and validation with asymmetric keys.

pub mod claims;
pub mod keys;
pub mod service;
pub mod token;

pub use claims::Claims;
pub use keys::{SigningKey, VerificationKey};
pub use service::{SessionTokens, TokenService};
pub use token::{TokenError, issue, validate};
