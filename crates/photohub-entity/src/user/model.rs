//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use photohub_core::traits::Owned;
use photohub_core::types::id::UserId;

/// A registered PhotoHub account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    /// Unique email address, stored lowercased.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Age in years.
    pub age: i32,
    /// Avatar location.
    pub profile_image_url: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The public subset embedded in photo, comment and social media responses.
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            email: self.email.clone(),
            username: self.username.clone(),
        }
    }
}

impl Owned for User {
    fn owner_id(&self) -> UserId {
        self.id
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Lowercased email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Age in years.
    pub age: i32,
    /// Avatar location (optional).
    pub profile_image_url: Option<String>,
}

/// Data for replacing a user's self-editable profile fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// The user ID to update.
    pub id: UserId,
    /// New username.
    pub username: String,
    /// New lowercased email address.
    pub email: String,
    /// New age.
    pub age: i32,
    /// New avatar location.
    pub profile_image_url: Option<String>,
}

/// Owner details shown next to a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// User identifier.
    pub id: UserId,
    /// Email address.
    pub email: String,
    /// Username.
    pub username: String,
}
