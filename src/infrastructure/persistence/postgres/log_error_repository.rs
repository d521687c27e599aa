use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::{errors::RepositoryError, ports::LogErrorRepository};

/// Stores server-fault traces in the `errors` table
pub struct PostgresLogErrorRepository {
  pool: PgPool,
}

impl PostgresLogErrorRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl LogErrorRepository for PostgresLogErrorRepository {
  async fn log_error(&self, trace: &str) -> Result<(), RepositoryError> {
    sqlx::query(
      r#"
            INSERT INTO errors (id, stack, created_at)
            VALUES ($1, $2, NOW())
            "#,
    )
    .bind(Uuid::new_v4())
    .bind(trace)
    .execute(&self.pool)
    .await?;

    Ok(())
  }
}
