//! Social media repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use photohub_core::error::{AppError, ErrorKind};
use photohub_core::result::AppResult;
use photohub_core::traits::Repository;
use photohub_core::types::id::{SocialMediaId, UserId};
use photohub_entity::social_media::{CreateSocialMedia, SocialMedia, UpdateSocialMedia};

use crate::store::{SOCIAL_MEDIA_MISSING, SocialMediaStore};

/// Repository for social media link CRUD.
#[derive(Debug, Clone)]
pub struct PgSocialMediaRepository {
    pool: PgPool,
}

impl PgSocialMediaRepository {
    /// Create a new social media repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<SocialMedia, SocialMediaId> for PgSocialMediaRepository {
    async fn find_by_id(&self, id: SocialMediaId) -> AppResult<Option<SocialMedia>> {
        sqlx::query_as::<_, SocialMedia>("SELECT * FROM social_medias WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find social media", e)
            })
    }

    async fn delete(&self, id: SocialMediaId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM social_medias WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete social media", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl SocialMediaStore for PgSocialMediaRepository {
    async fn list_by_user(&self, user_id: UserId) -> AppResult<Vec<SocialMedia>> {
        sqlx::query_as::<_, SocialMedia>(
            "SELECT * FROM social_medias WHERE user_id = $1 ORDER BY id ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list social medias", e)
        })
    }

    async fn create(&self, data: &CreateSocialMedia) -> AppResult<SocialMedia> {
        sqlx::query_as::<_, SocialMedia>(
            "INSERT INTO social_medias (name, social_media_url, user_id) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.social_media_url)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create social media", e)
        })
    }

    async fn update(&self, data: &UpdateSocialMedia) -> AppResult<SocialMedia> {
        sqlx::query_as::<_, SocialMedia>(
            "UPDATE social_medias SET name = $2, social_media_url = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.name)
        .bind(&data.social_media_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update social media", e)
        })?
        .ok_or_else(|| AppError::not_found(SOCIAL_MEDIA_MISSING))
    }
}
