//! Store traits for every PhotoHub entity.
//!
//! Each trait extends the generic [`Repository`] with the queries and
//! writes its entity needs. Implementations must report unique
//! violations on `username`/`email` as `Conflict`, and deleting a user or
//! photo must cascade to the rows that reference it.

use async_trait::async_trait;

use photohub_core::result::AppResult;
use photohub_core::traits::Repository;
use photohub_core::types::id::{CommentId, PhotoId, SocialMediaId, UserId};
use photohub_core::types::pagination::{PageRequest, PageResponse};
use photohub_entity::comment::{Comment, CreateComment, UpdateComment};
use photohub_entity::photo::{CreatePhoto, Photo, UpdatePhoto};
use photohub_entity::social_media::{CreateSocialMedia, SocialMedia, UpdateSocialMedia};
use photohub_entity::user::{CreateUser, UpdateUser, User};

/// Message for a violated unique email.
pub const EMAIL_TAKEN: &str = "User with that email already exists";
/// Message for a violated unique username.
pub const USERNAME_TAKEN: &str = "Username already exists";
/// Message for an unknown user id.
pub const USER_MISSING: &str = "No user with that ID exists";
/// Message for an unknown photo id.
pub const PHOTO_MISSING: &str = "No photo with that ID exists";
/// Message for an unknown comment id.
pub const COMMENT_MISSING: &str = "No comment with that ID exists";
/// Message for an unknown social media id.
pub const SOCIAL_MEDIA_MISSING: &str = "No social media entry with that ID exists";

/// Persistence for user accounts.
#[async_trait]
pub trait UserStore: Repository<User, UserId> {
    /// Fetch every user whose id is in `ids`. Missing ids are skipped.
    async fn find_by_ids(&self, ids: &[UserId]) -> AppResult<Vec<User>>;

    /// Find a user by (already lowercased) email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Insert a new user.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Replace a user's profile fields.
    async fn update(&self, data: &UpdateUser) -> AppResult<User>;
}

/// Persistence for photos.
#[async_trait]
pub trait PhotoStore: Repository<Photo, PhotoId> {
    /// Fetch every photo whose id is in `ids`. Missing ids are skipped.
    async fn find_by_ids(&self, ids: &[PhotoId]) -> AppResult<Vec<Photo>>;

    /// One page of photos in insertion order.
    async fn list(&self, page: PageRequest) -> AppResult<PageResponse<Photo>>;

    /// Insert a new photo.
    async fn create(&self, data: &CreatePhoto) -> AppResult<Photo>;

    /// Replace a photo's editable fields.
    async fn update(&self, data: &UpdatePhoto) -> AppResult<Photo>;
}

/// Persistence for comments.
#[async_trait]
pub trait CommentStore: Repository<Comment, CommentId> {
    /// Every comment in insertion order.
    async fn list_all(&self) -> AppResult<Vec<Comment>>;

    /// Insert a new comment. Fails with `NotFound` if the photo is gone.
    async fn create(&self, data: &CreateComment) -> AppResult<Comment>;

    /// Replace a comment's message.
    async fn update(&self, data: &UpdateComment) -> AppResult<Comment>;
}

/// Persistence for social media links.
#[async_trait]
pub trait SocialMediaStore: Repository<SocialMedia, SocialMediaId> {
    /// All links owned by `user_id`.
    async fn list_by_user(&self, user_id: UserId) -> AppResult<Vec<SocialMedia>>;

    /// Insert a new link.
    async fn create(&self, data: &CreateSocialMedia) -> AppResult<SocialMedia>;

    /// Replace a link's editable fields.
    async fn update(&self, data: &UpdateSocialMedia) -> AppResult<SocialMedia>;
}
