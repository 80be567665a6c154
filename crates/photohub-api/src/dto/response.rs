//! Response DTOs.

use serde::{Deserialize, Serialize};

use photohub_core::types::id::UserId;
use photohub_core::types::pagination::PageResponse;
use photohub_entity::comment::CommentSummary;
use photohub_entity::photo::PhotoSummary;
use photohub_entity::social_media::SocialMediaSummary;
use photohub_entity::user::{User, UserSummary};
use photohub_service::{CommentDetails, PhotoDetails, SocialMediaDetails};

const SUCCESS: &str = "success";

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always `success`.
    pub status: String,
    /// Response data.
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            status: SUCCESS.to_string(),
            data,
        }
    }
}

/// Body-less success, used by deletes and health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Always `success`.
    pub status: String,
}

impl StatusResponse {
    /// Creates a successful response.
    pub fn ok() -> Self {
        Self {
            status: SUCCESS.to_string(),
        }
    }
}

/// Paginated list with the items under `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Always `success`.
    pub status: String,
    /// Items in this page.
    pub data: Vec<T>,
    /// Current page.
    pub page: u64,
    /// Items per page.
    pub limit: u64,
    /// Total item count.
    pub total_items: u64,
}

impl<T> From<PageResponse<T>> for PaginatedResponse<T> {
    fn from(page: PageResponse<T>) -> Self {
        Self {
            status: SUCCESS.to_string(),
            data: page.items,
            page: page.page,
            limit: page.limit,
            total_items: page.total_items,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Always `success`.
    pub status: String,
    /// Access token, also set as a cookie.
    pub access_token: String,
}

impl LoginResponse {
    /// Wrap a freshly issued access token.
    pub fn new(access_token: String) -> Self {
        Self {
            status: SUCCESS.to_string(),
            access_token,
        }
    }
}

/// Account as exposed to its owner. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: UserId,
    /// Email.
    pub email: String,
    /// Username.
    pub username: String,
    /// Age.
    pub age: i32,
    /// Avatar.
    pub profile_image_url: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            age: user.age,
            profile_image_url: user.profile_image_url,
        }
    }
}

/// Photo with its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoResponse {
    /// Photo fields.
    #[serde(flatten)]
    pub photo: PhotoSummary,
    /// Owner.
    pub user: Option<UserSummary>,
}

impl From<PhotoDetails> for PhotoResponse {
    fn from(details: PhotoDetails) -> Self {
        Self {
            photo: details.photo.summary(),
            user: details.owner,
        }
    }
}

/// Comment with its author and photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    /// Comment fields.
    #[serde(flatten)]
    pub comment: CommentSummary,
    /// Author.
    pub user: Option<UserSummary>,
    /// Photo commented on.
    pub photo: Option<PhotoSummary>,
}

impl From<CommentDetails> for CommentResponse {
    fn from(details: CommentDetails) -> Self {
        Self {
            comment: details.comment.summary(),
            user: details.user,
            photo: details.photo,
        }
    }
}

/// Social media link with its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialMediaResponse {
    /// Link fields.
    #[serde(flatten)]
    pub social_media: SocialMediaSummary,
    /// Owner.
    pub user: Option<UserSummary>,
}

impl From<SocialMediaDetails> for SocialMediaResponse {
    fn from(details: SocialMediaDetails) -> Self {
        Self {
            social_media: details.social_media.summary(),
            user: details.user,
        }
    }
}

/// Liveness probe body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `success`.
    pub status: String,
    /// Crate version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "username": "alice",
            "email": "a@x.com",
            "password_hash": "$argon2id$v=19$m=1024,t=1,p=1$c2FsdA$aGFzaA",
            "age": 20,
            "profile_image_url": null,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_user_response_has_no_hash() {
        let json = serde_json::to_value(ApiResponse::ok(UserResponse::from(sample_user()))).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["email"], "a@x.com");
        assert!(json["data"].get("password_hash").is_none());
    }

    #[test]
    fn test_page_items_land_under_data() {
        let page = PageResponse::new(vec![1, 2], photohub_core::types::PageRequest::new(2, 2), 5);
        let json = serde_json::to_value(PaginatedResponse::from(page)).unwrap();
        assert_eq!(json["data"], serde_json::json!([1, 2]));
        assert_eq!(json["page"], 2);
        assert_eq!(json["total_items"], 5);
    }
}
