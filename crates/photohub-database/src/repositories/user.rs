//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use photohub_core::error::{AppError, ErrorKind};
use photohub_core::result::AppResult;
use photohub_core::traits::Repository;
use photohub_core::types::id::UserId;
use photohub_entity::user::{CreateUser, UpdateUser, User};

use crate::store::{EMAIL_TAKEN, USER_MISSING, USERNAME_TAKEN, UserStore};

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Translate unique violations on `users` into `Conflict`.
fn map_write_error(e: sqlx::Error, action: &str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
            AppError::conflict(EMAIL_TAKEN)
        }
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some("users_username_key") =>
        {
            AppError::conflict(USERNAME_TAKEN)
        }
        _ => AppError::with_source(ErrorKind::Database, format!("Failed to {action} user"), e),
    }
}

#[async_trait]
impl Repository<User, UserId> for PgUserRepository {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn delete(&self, id: UserId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl UserStore for PgUserRepository {
    async fn find_by_ids(&self, ids: &[UserId]) -> AppResult<Vec<User>> {
        let raw: Vec<i64> = ids.iter().map(|id| id.get()).collect();
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ANY($1)")
            .bind(raw)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find users", e))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password_hash, age, profile_image_url) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.age)
        .bind(&data.profile_image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "create"))
    }

    async fn update(&self, data: &UpdateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET username = $2, email = $3, age = $4, profile_image_url = $5, \
             updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.username)
        .bind(&data.email)
        .bind(data.age)
        .bind(&data.profile_image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "update"))?
        .ok_or_else(|| AppError::not_found(USER_MISSING))
    }
}
