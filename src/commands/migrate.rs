//! Database migration command.

use photohub_core::config::{AppConfig, DatabaseProvider};
use photohub_core::error::AppError;
use photohub_database::DatabasePool;
use photohub_database::migration::run_migrations;

/// Apply every pending migration, then close the pool.
pub async fn execute(config: AppConfig) -> Result<(), AppError> {
    if config.database.provider == DatabaseProvider::Memory {
        tracing::warn!("database.provider is \"memory\"; nothing to migrate");
        return Ok(());
    }

    let pool = DatabasePool::connect(&config.database).await?;
    tracing::info!("Running database migrations...");
    run_migrations(pool.pool()).await?;
    pool.close().await;
    tracing::info!("All migrations applied successfully");
    Ok(())
}
