//! Token to user resolution for protected requests.
//!
//! Runs once per request: extract → validate → one store lookup. No
//! identity is cached between requests.

use std::sync::Arc;

use tracing::debug;

use photohub_core::error::AppError;
use photohub_core::result::AppResult;
use photohub_core::traits::Repository;
use photohub_database::UserStore;
use photohub_entity::user::User;

use crate::jwt::TokenService;

/// Message when no token was presented.
pub const NOT_LOGGED_IN: &str = "You are not logged in";
/// Message for any token that fails validation.
pub const INVALID_TOKEN: &str = "Invalid or expired token";
/// Message when the token's subject has been deleted.
pub const USER_GONE: &str = "The user belonging to this token no longer exists";

/// Resolves a bearer token into the user it was issued to.
#[derive(Clone)]
pub struct Authenticator {
    tokens: Arc<TokenService>,
    users: Arc<dyn UserStore>,
}

impl Authenticator {
    /// Creates an authenticator over the given token service and credential store.
    pub fn new(tokens: Arc<TokenService>, users: Arc<dyn UserStore>) -> Self {
        Self { tokens, users }
    }

    /// Validate `token` and load its user.
    ///
    /// Every failure is `Unauthorized`; the specific token error is only logged.
    pub async fn authenticate(&self, token: Option<&str>) -> AppResult<User> {
        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => return Err(AppError::unauthorized(NOT_LOGGED_IN)),
        };

        let user_id = self.tokens.validate_access(token).map_err(|e| {
            debug!(error = %e, "Access token rejected");
            AppError::unauthorized(INVALID_TOKEN)
        })?;

        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                debug!(user_id = %user_id, "Token subject no longer exists");
                AppError::unauthorized(USER_GONE)
            })
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}
