//! Comment repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use photohub_core::error::{AppError, ErrorKind};
use photohub_core::result::AppResult;
use photohub_core::traits::Repository;
use photohub_core::types::id::CommentId;
use photohub_entity::comment::{Comment, CreateComment, UpdateComment};

use crate::store::{COMMENT_MISSING, CommentStore, PHOTO_MISSING};

/// Repository for comment CRUD.
#[derive(Debug, Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Comment, CommentId> for PgCommentRepository {
    async fn find_by_id(&self, id: CommentId) -> AppResult<Option<Comment>> {
        sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find comment", e))
    }

    async fn delete(&self, id: CommentId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete comment", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl CommentStore for PgCommentRepository {
    async fn list_all(&self) -> AppResult<Vec<Comment>> {
        sqlx::query_as::<_, Comment>("SELECT * FROM comments ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))
    }

    async fn create(&self, data: &CreateComment) -> AppResult<Comment> {
        sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (user_id, photo_id, message) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.photo_id)
        .bind(&data.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            // The photo was deleted between the existence check and the insert.
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("comments_photo_id_fkey") =>
            {
                AppError::not_found(PHOTO_MISSING)
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create comment", e),
        })
    }

    async fn update(&self, data: &UpdateComment) -> AppResult<Comment> {
        sqlx::query_as::<_, Comment>(
            "UPDATE comments SET message = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.message)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update comment", e))?
        .ok_or_else(|| AppError::not_found(COMMENT_MISSING))
    }
}
