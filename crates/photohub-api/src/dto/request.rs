//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use photohub_core::types::id::PhotoId;
use photohub_service::{
    PhotoInput, RegisterInput, SocialMediaInput, UpdateProfileInput,
};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Username.
    #[validate(length(min = 1, max = 50, message = "Username is required and at most 50 characters"))]
    pub username: String,
    /// Email.
    #[validate(
        email(message = "Email must be a valid address"),
        length(max = 150, message = "Email must be at most 150 characters")
    )]
    pub email: String,
    /// Password; length rules come from configuration.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Age in years.
    #[validate(range(min = 8, message = "Age must be at least 8"))]
    pub age: i32,
    /// Optional avatar location.
    #[validate(url(message = "Profile image URL must be a valid URL"))]
    pub profile_image_url: Option<String>,
}

impl From<RegisterRequest> for RegisterInput {
    fn from(req: RegisterRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
            age: req.age,
            profile_image_url: req.profile_image_url,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Profile update body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// Username.
    #[validate(length(min = 1, max = 50, message = "Username is required and at most 50 characters"))]
    pub username: String,
    /// Email.
    #[validate(
        email(message = "Email must be a valid address"),
        length(max = 150, message = "Email must be at most 150 characters")
    )]
    pub email: String,
    /// Age in years.
    #[validate(range(min = 8, message = "Age must be at least 8"))]
    pub age: i32,
    /// Optional avatar location.
    #[validate(url(message = "Profile image URL must be a valid URL"))]
    pub profile_image_url: Option<String>,
}

impl From<UpdateUserRequest> for UpdateProfileInput {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            age: req.age,
            profile_image_url: req.profile_image_url,
        }
    }
}

/// Photo create and update body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PhotoRequest {
    /// Title.
    #[validate(length(min = 1, max = 100, message = "Title is required and at most 100 characters"))]
    pub title: String,
    /// Optional caption.
    #[validate(length(max = 200, message = "Caption must be at most 200 characters"))]
    pub caption: Option<String>,
    /// Image location.
    #[validate(url(message = "Photo URL must be a valid URL"))]
    pub photo_url: String,
}

impl From<PhotoRequest> for PhotoInput {
    fn from(req: PhotoRequest) -> Self {
        Self {
            title: req.title,
            caption: req.caption,
            photo_url: req.photo_url,
        }
    }
}

/// New comment body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommentRequest {
    /// Comment text.
    #[validate(length(min = 1, max = 200, message = "Message is required and at most 200 characters"))]
    pub message: String,
    /// Photo being commented on.
    pub photo_id: PhotoId,
}

/// Comment edit body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    /// Comment text.
    #[validate(length(min = 1, max = 200, message = "Message is required and at most 200 characters"))]
    pub message: String,
}

/// Social media create and update body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SocialMediaRequest {
    /// Network name.
    #[validate(length(min = 1, max = 50, message = "Name is required and at most 50 characters"))]
    pub name: String,
    /// Profile location.
    #[validate(url(message = "Social media URL must be a valid URL"))]
    pub social_media_url: String,
}

impl From<SocialMediaRequest> for SocialMediaInput {
    fn from(req: SocialMediaRequest) -> Self {
        Self {
            name: req.name,
            social_media_url: req.social_media_url,
        }
    }
}
