//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use photohub_core::traits::Owned;
use photohub_core::types::id::{CommentId, PhotoId, UserId};

/// A comment left by a user on a photo.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: CommentId,
    /// Author.
    pub user_id: UserId,
    /// Photo being commented on.
    pub photo_id: PhotoId,
    /// Comment text (max 200 characters).
    pub message: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
    /// When the comment was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// The response shape without timestamps.
    pub fn summary(&self) -> CommentSummary {
        CommentSummary {
            id: self.id,
            message: self.message.clone(),
            photo_id: self.photo_id,
            user_id: self.user_id,
        }
    }
}

impl Owned for Comment {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

/// Data required to create a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    /// Author, taken from the authenticated identity.
    pub user_id: UserId,
    /// Target photo.
    pub photo_id: PhotoId,
    /// Comment text.
    pub message: String,
}

/// New text for an existing comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateComment {
    /// The comment to update.
    pub id: CommentId,
    /// New text.
    pub message: String,
}

/// Comment fields returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSummary {
    /// Comment identifier.
    pub id: CommentId,
    /// Comment text.
    pub message: String,
    /// Target photo.
    pub photo_id: PhotoId,
    /// Author.
    pub user_id: UserId,
}
