//! Account registration and credential login.

use std::sync::Arc;

use tracing::{info, warn};

use photohub_auth::{PasswordHasher, PasswordValidator, SessionTokens, TokenService};
use photohub_core::error::AppError;
use photohub_core::result::AppResult;
use photohub_database::UserStore;
use photohub_database::store::{EMAIL_TAKEN, USERNAME_TAKEN};
use photohub_entity::user::{CreateUser, User};

/// Login failure message; identical for unknown email and wrong password.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Data for a new account. Field-level format checks happen at the edge.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    /// Desired username.
    pub username: String,
    /// Email in any case; stored lowercased.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Age in years.
    pub age: i32,
    /// Avatar location.
    pub profile_image_url: Option<String>,
}

/// A successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated account.
    pub user: User,
    /// Freshly issued access/refresh pair.
    pub tokens: SessionTokens,
}

/// Handles registration and login.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            tokens,
        }
    }

    /// Create an account.
    ///
    /// The email is lowercased before the uniqueness check and storage, so
    /// addresses differing only in case collide.
    pub async fn register(&self, input: RegisterInput) -> AppResult<User> {
        let email = input.email.trim().to_lowercase();
        self.validator.validate(&input.password)?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict(EMAIL_TAKEN));
        }
        if self.users.find_by_username(&input.username).await?.is_some() {
            return Err(AppError::conflict(USERNAME_TAKEN));
        }

        let password_hash = self.hasher.hash_password(&input.password)?;
        let user = self
            .users
            .create(&CreateUser {
                username: input.username,
                email,
                password_hash,
                age: input.age,
                profile_image_url: input.profile_image_url,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Check credentials and issue a session pair.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let email = email.trim().to_lowercase();

        let Some(user) = self.users.find_by_email(&email).await? else {
            warn!("Login attempt for unknown email");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let tokens = self.tokens.issue_session(user.id)?;
        info!(user_id = %user.id, "User logged in");
        Ok(LoginOutcome { user, tokens })
    }
}
