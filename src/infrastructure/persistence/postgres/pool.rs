use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use thiserror::Error;

use crate::infrastructure::config::DatabaseConfig;

/// Errors raised while preparing the database at startup
#[derive(Debug, Error)]
pub enum DatabaseSetupError {
  #[error("Invalid database URL: {0}")]
  InvalidUrl(#[source] sqlx::Error),

  #[error("Database migrations timed out after {0} seconds")]
  MigrationTimeout(u64),

  #[error("Failed to run database migrations: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),
}

/// Creates the shared connection pool without opening a connection
///
/// The first connection is established on first use and reused afterwards,
/// so the process starts even when PostgreSQL is not yet reachable.
pub fn create_lazy_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseSetupError> {
  PgPoolOptions::new()
    .max_connections(config.max_connections)
    .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
    .connect_lazy(&config.url)
    .map_err(DatabaseSetupError::InvalidUrl)
}

/// Applies pending migrations from `./migrations`
pub async fn run_migrations(pool: &PgPool, timeout_seconds: u64) -> Result<(), DatabaseSetupError> {
  tokio::time::timeout(
    Duration::from_secs(timeout_seconds),
    sqlx::migrate!("./migrations").run(pool),
  )
  .await
  .map_err(|_| DatabaseSetupError::MigrationTimeout(timeout_seconds))??;

  Ok(())
}
