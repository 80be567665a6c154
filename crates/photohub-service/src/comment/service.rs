//! Comments on photos.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use photohub_auth::ensure_owner;
use photohub_core::error::AppError;
use photohub_core::result::AppResult;
use photohub_core::traits::Repository;
use photohub_core::types::id::{CommentId, PhotoId, UserId};
use photohub_database::store::{COMMENT_MISSING, PHOTO_MISSING};
use photohub_database::{CommentStore, PhotoStore, UserStore};
use photohub_entity::comment::{Comment, CreateComment, UpdateComment};
use photohub_entity::photo::PhotoSummary;
use photohub_entity::user::UserSummary;

use crate::context::RequestContext;

/// A comment with its author and photo.
#[derive(Debug, Clone)]
pub struct CommentDetails {
    /// The comment.
    pub comment: Comment,
    /// Author.
    pub user: Option<UserSummary>,
    /// Photo commented on.
    pub photo: Option<PhotoSummary>,
}

/// Handles comment use cases.
#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentStore>,
    photos: Arc<dyn PhotoStore>,
    users: Arc<dyn UserStore>,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(
        comments: Arc<dyn CommentStore>,
        photos: Arc<dyn PhotoStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            comments,
            photos,
            users,
        }
    }

    /// Comment on an existing photo as the current user.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        photo_id: PhotoId,
        message: String,
    ) -> AppResult<Comment> {
        if self.photos.find_by_id(photo_id).await?.is_none() {
            return Err(AppError::not_found(PHOTO_MISSING));
        }

        let comment = self
            .comments
            .create(&CreateComment {
                user_id: ctx.user_id(),
                photo_id,
                message,
            })
            .await?;
        info!(comment_id = %comment.id, photo_id = %photo_id, user_id = %ctx.user_id(), "Comment created");
        Ok(comment)
    }

    /// Every comment with its author and photo.
    pub async fn list(&self) -> AppResult<Vec<CommentDetails>> {
        let comments = self.comments.list_all().await?;
        self.with_details(comments).await
    }

    /// One comment with its author and photo.
    pub async fn get(&self, id: CommentId) -> AppResult<CommentDetails> {
        let comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(COMMENT_MISSING))?;
        let mut details = self.with_details(vec![comment]).await?;
        details
            .pop()
            .ok_or_else(|| AppError::internal("Comment details lookup returned nothing"))
    }

    /// Replace a comment's message. Author only.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: CommentId,
        message: String,
    ) -> AppResult<Comment> {
        let existing = self.comments.find_by_id(id).await?;
        ensure_owner(existing, &ctx.user, "comment", "update")?;

        let comment = self.comments.update(&UpdateComment { id, message }).await?;
        info!(comment_id = %id, user_id = %ctx.user_id(), "Comment updated");
        Ok(comment)
    }

    /// Delete a comment. Author only.
    pub async fn delete(&self, ctx: &RequestContext, id: CommentId) -> AppResult<()> {
        let existing = self.comments.find_by_id(id).await?;
        ensure_owner(existing, &ctx.user, "comment", "delete")?;

        if !self.comments.delete(id).await? {
            return Err(AppError::not_found(COMMENT_MISSING));
        }
        info!(comment_id = %id, user_id = %ctx.user_id(), "Comment deleted");
        Ok(())
    }

    /// Attach author and photo summaries with one batched lookup each.
    async fn with_details(&self, comments: Vec<Comment>) -> AppResult<Vec<CommentDetails>> {
        let mut user_ids: Vec<UserId> = comments.iter().map(|c| c.user_id).collect();
        user_ids.sort();
        user_ids.dedup();
        let mut photo_ids: Vec<PhotoId> = comments.iter().map(|c| c.photo_id).collect();
        photo_ids.sort();
        photo_ids.dedup();

        let users: HashMap<UserId, UserSummary> = self
            .users
            .find_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u.summary()))
            .collect();
        let photos: HashMap<PhotoId, PhotoSummary> = self
            .photos
            .find_by_ids(&photo_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p.summary()))
            .collect();

        Ok(comments
            .into_iter()
            .map(|comment| CommentDetails {
                user: users.get(&comment.user_id).cloned(),
                photo: photos.get(&comment.photo_id).cloned(),
                comment,
            })
            .collect())
    }
}
