//! User self-service operations: profile viewing, editing and deletion.

use std::sync::Arc;

use tracing::info;

use photohub_core::error::AppError;
use photohub_core::result::AppResult;
use photohub_core::traits::Repository;
use photohub_database::UserStore;
use photohub_database::store::{EMAIL_TAKEN, USER_MISSING, USERNAME_TAKEN};
use photohub_entity::user::{UpdateUser, User};

use crate::context::RequestContext;

/// Replacement profile fields for the current user.
#[derive(Debug, Clone)]
pub struct UpdateProfileInput {
    /// New username.
    pub username: String,
    /// New email in any case; stored lowercased.
    pub email: String,
    /// New age.
    pub age: i32,
    /// New avatar location.
    pub profile_image_url: Option<String>,
}

/// Handles user self-service operations.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// The current user's profile, as resolved for this request.
    pub fn get_profile(&self, ctx: &RequestContext) -> User {
        ctx.user.clone()
    }

    /// Replace the current user's profile fields.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        input: UpdateProfileInput,
    ) -> AppResult<User> {
        let email = input.email.trim().to_lowercase();

        if let Some(existing) = self.users.find_by_username(&input.username).await? {
            if existing.id != ctx.user_id() {
                return Err(AppError::conflict(USERNAME_TAKEN));
            }
        }
        if let Some(existing) = self.users.find_by_email(&email).await? {
            if existing.id != ctx.user_id() {
                return Err(AppError::conflict(EMAIL_TAKEN));
            }
        }

        let user = self
            .users
            .update(&UpdateUser {
                id: ctx.user_id(),
                username: input.username,
                email,
                age: input.age,
                profile_image_url: input.profile_image_url,
            })
            .await?;

        info!(user_id = %user.id, "Profile updated");
        Ok(user)
    }

    /// Delete the current user and everything they own.
    pub async fn delete_account(&self, ctx: &RequestContext) -> AppResult<()> {
        if !self.users.delete(ctx.user_id()).await? {
            return Err(AppError::not_found(USER_MISSING));
        }
        info!(user_id = %ctx.user_id(), "Account deleted");
        Ok(())
    }
}
