//! Photo repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use photohub_core::error::{AppError, ErrorKind};
use photohub_core::result::AppResult;
use photohub_core::traits::Repository;
use photohub_core::types::id::PhotoId;
use photohub_core::types::pagination::{PageRequest, PageResponse};
use photohub_entity::photo::{CreatePhoto, Photo, UpdatePhoto};

use crate::store::{PHOTO_MISSING, PhotoStore};

/// Repository for photo CRUD and listing.
#[derive(Debug, Clone)]
pub struct PgPhotoRepository {
    pool: PgPool,
}

impl PgPhotoRepository {
    /// Create a new photo repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Photo, PhotoId> for PgPhotoRepository {
    async fn find_by_id(&self, id: PhotoId) -> AppResult<Option<Photo>> {
        sqlx::query_as::<_, Photo>("SELECT * FROM photos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find photo", e))
    }

    async fn delete(&self, id: PhotoId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete photo", e))?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl PhotoStore for PgPhotoRepository {
    async fn find_by_ids(&self, ids: &[PhotoId]) -> AppResult<Vec<Photo>> {
        let raw: Vec<i64> = ids.iter().map(|id| id.get()).collect();
        sqlx::query_as::<_, Photo>("SELECT * FROM photos WHERE id = ANY($1)")
            .bind(raw)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find photos", e))
    }

    async fn list(&self, page: PageRequest) -> AppResult<PageResponse<Photo>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM photos")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count photos", e))?;

        let photos = sqlx::query_as::<_, Photo>(
            "SELECT * FROM photos ORDER BY id ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit as i64)
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list photos", e))?;

        Ok(PageResponse::new(photos, page, total as u64))
    }

    async fn create(&self, data: &CreatePhoto) -> AppResult<Photo> {
        sqlx::query_as::<_, Photo>(
            "INSERT INTO photos (title, caption, photo_url, user_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.caption)
        .bind(&data.photo_url)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create photo", e))
    }

    async fn update(&self, data: &UpdatePhoto) -> AppResult<Photo> {
        sqlx::query_as::<_, Photo>(
            "UPDATE photos SET title = $2, caption = $3, photo_url = $4, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.title)
        .bind(&data.caption)
        .bind(&data.photo_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update photo", e))?
        .ok_or_else(|| AppError::not_found(PHOTO_MISSING))
    }
}
