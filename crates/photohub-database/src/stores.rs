//! The bundle of stores handed to the service layer.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::warn;

use photohub_core::config::{DatabaseConfig, DatabaseProvider};
use photohub_core::result::AppResult;

use crate::connection::DatabasePool;
#[cfg(feature = "memory")]
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{
    PgCommentRepository, PgPhotoRepository, PgSocialMediaRepository, PgUserRepository,
};
use crate::store::{CommentStore, PhotoStore, SocialMediaStore, UserStore};

/// One implementation of every store trait, shared behind `Arc`.
#[derive(Clone)]
pub struct Stores {
    /// Credential store.
    pub users: Arc<dyn UserStore>,
    /// Photo store.
    pub photos: Arc<dyn PhotoStore>,
    /// Comment store.
    pub comments: Arc<dyn CommentStore>,
    /// Social media store.
    pub social_medias: Arc<dyn SocialMediaStore>,
}

impl Stores {
    /// Stores backed by PostgreSQL.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            photos: Arc::new(PgPhotoRepository::new(pool.clone())),
            comments: Arc::new(PgCommentRepository::new(pool.clone())),
            social_medias: Arc::new(PgSocialMediaRepository::new(pool)),
        }
    }

    /// Stores sharing one in-memory backend.
    #[cfg(feature = "memory")]
    pub fn from_memory(store: Arc<MemoryStore>) -> Self {
        Self {
            users: store.clone(),
            photos: store.clone(),
            comments: store.clone(),
            social_medias: store,
        }
    }

    /// A fresh, empty in-memory backend.
    #[cfg(feature = "memory")]
    pub fn memory() -> Self {
        Self::from_memory(Arc::new(MemoryStore::new()))
    }

    /// Build the stores selected by `database.provider`.
    ///
    /// For PostgreSQL this connects the pool and applies pending
    /// migrations when `run_migrations` is set.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            DatabaseProvider::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self::postgres(pool.into_pool()))
            }
            DatabaseProvider::Memory => Self::memory_provider(),
        }
    }

    #[cfg(feature = "memory")]
    fn memory_provider() -> AppResult<Self> {
        warn!("Using the in-memory store; data is lost on shutdown");
        Ok(Self::memory())
    }

    #[cfg(not(feature = "memory"))]
    fn memory_provider() -> AppResult<Self> {
        Err(photohub_core::AppError::configuration(
            "database.provider = \"memory\" requires the `memory` feature",
        ))
    }
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores").finish_non_exhaustive()
    }
}
