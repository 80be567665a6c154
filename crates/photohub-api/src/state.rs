//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use photohub_auth::{Authenticator, PasswordHasher, PasswordValidator, TokenService};
use photohub_core::config::AppConfig;
use photohub_core::result::AppResult;
use photohub_database::Stores;
use photohub_service::{AuthService, CommentService, PhotoService, SocialMediaService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Auth ─────────────────────────────────────────────────
    /// Resolves the caller behind an access token
    pub authenticator: Arc<Authenticator>,

    // ── Services ─────────────────────────────────────────────
    /// Registration and login
    pub auth_service: Arc<AuthService>,
    /// Self-service account management
    pub user_service: Arc<UserService>,
    /// Photo CRUD
    pub photo_service: Arc<PhotoService>,
    /// Comment CRUD
    pub comment_service: Arc<CommentService>,
    /// Social media link CRUD
    pub social_media_service: Arc<SocialMediaService>,
}

impl AppState {
    /// Wire every component from configuration and a set of stores.
    ///
    /// Fails when the signing keys cannot be loaded or the Argon2
    /// parameters are rejected.
    pub fn new(config: AppConfig, stores: Stores) -> AppResult<Self> {
        let tokens = Arc::new(TokenService::from_config(&config.auth)?);
        let hasher = Arc::new(PasswordHasher::new(&config.auth.argon2)?);
        let validator = Arc::new(PasswordValidator::new(&config.auth));

        let authenticator = Arc::new(Authenticator::new(
            Arc::clone(&tokens),
            Arc::clone(&stores.users),
        ));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&stores.users),
            hasher,
            validator,
            tokens,
        ));
        let user_service = Arc::new(UserService::new(Arc::clone(&stores.users)));
        let photo_service = Arc::new(PhotoService::new(
            Arc::clone(&stores.photos),
            Arc::clone(&stores.users),
        ));
        let comment_service = Arc::new(CommentService::new(
            Arc::clone(&stores.comments),
            Arc::clone(&stores.photos),
            Arc::clone(&stores.users),
        ));
        let social_media_service = Arc::new(SocialMediaService::new(
            Arc::clone(&stores.social_medias),
            Arc::clone(&stores.users),
        ));

        Ok(Self {
            config: Arc::new(config),
            authenticator,
            auth_service,
            user_service,
            photo_service,
            comment_service,
            social_media_service,
        })
    }
}
