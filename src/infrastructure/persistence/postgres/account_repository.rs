use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::{
  entities::{Account, AccountId, AddAccountParams},
  errors::RepositoryError,
  ports::{AddAccountRepository, LoadAccountByEmailRepository, UpdateAccessTokenRepository},
};

/// PostgreSQL store for accounts
pub struct PostgresAccountRepository {
  pool: PgPool,
}

impl PostgresAccountRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for accounts table
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
  id: Uuid,
  name: String,
  email: String,
  password: String,
  access_token: Option<String>,
}

impl From<AccountRow> for Account {
  fn from(row: AccountRow) -> Self {
    Account::from_db(
      AccountId::from_uuid(row.id),
      row.name,
      row.email,
      row.password,
      row.access_token,
    )
  }
}

#[async_trait]
impl AddAccountRepository for PostgresAccountRepository {
  async fn add(&self, params: AddAccountParams) -> Result<Account, RepositoryError> {
    let row = sqlx::query_as::<_, AccountRow>(
      r#"
            INSERT INTO accounts (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password, access_token
            "#,
    )
    .bind(AccountId::new().as_uuid())
    .bind(&params.name)
    .bind(&params.email)
    .bind(&params.password)
    .fetch_one(&self.pool)
    .await?;

    tracing::debug!(account_id = %row.id, "Account row inserted");

    Ok(row.into())
  }
}

#[async_trait]
impl LoadAccountByEmailRepository for PostgresAccountRepository {
  async fn load_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError> {
    let row = sqlx::query_as::<_, AccountRow>(
      r#"
            SELECT id, name, email, password, access_token
            FROM accounts
            WHERE email = $1
            "#,
    )
    .bind(email)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Into::into))
  }
}

#[async_trait]
impl UpdateAccessTokenRepository for PostgresAccountRepository {
  async fn update_access_token(
    &self,
    id: &AccountId,
    token: &str,
  ) -> Result<(), RepositoryError> {
    let result = sqlx::query(
      r#"
            UPDATE accounts
            SET
                access_token = $2,
                updated_at = NOW()
            WHERE id = $1
            "#,
    )
    .bind(id.as_uuid())
    .bind(token)
    .execute(&self.pool)
    .await?;

    if result.rows_affected() == 0 {
      return Err(RepositoryError::NotFound);
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use sqlx::postgres::PgPoolOptions;
  use testcontainers::ImageExt;
  use testcontainers_modules::postgres::Postgres;
  use testcontainers_modules::testcontainers::{ContainerAsync, runners::AsyncRunner};

  async fn setup_test_db() -> (PgPool, ContainerAsync<Postgres>) {
    let container = Postgres::default()
      .with_tag("16-alpine")
      .start()
      .await
      .expect("Failed to start postgres container");

    let host = container.get_host().await.expect("Failed to get host");
    let port = container
      .get_host_port_ipv4(5432)
      .await
      .expect("Failed to get port");
    let database_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

    let pool = PgPoolOptions::new()
      .max_connections(5)
      .connect(&database_url)
      .await
      .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
      .run(&pool)
      .await
      .expect("Failed to run migrations");

    (pool, container)
  }

  fn any_params() -> AddAccountParams {
    AddAccountParams::new("any_name", "any_email@mail.com", "hashed_password")
  }

  #[tokio::test]
  #[ignore = "requires Docker"]
  async fn test_add_returns_account() {
    let (pool, _container) = setup_test_db().await;
    let sut = PostgresAccountRepository::new(pool);

    let account = sut.add(any_params()).await.unwrap();

    assert_eq!(account.name, "any_name");
    assert_eq!(account.email, "any_email@mail.com");
    assert_eq!(account.password, "hashed_password");
    assert!(account.access_token.is_none());
  }

  #[tokio::test]
  #[ignore = "requires Docker"]
  async fn test_duplicate_email() {
    let (pool, _container) = setup_test_db().await;
    let sut = PostgresAccountRepository::new(pool);

    sut.add(any_params()).await.unwrap();
    let result = sut.add(any_params()).await;

    assert!(matches!(result, Err(RepositoryError::DuplicateKey(_))));
  }

  #[tokio::test]
  #[ignore = "requires Docker"]
  async fn test_load_by_email() {
    let (pool, _container) = setup_test_db().await;
    let sut = PostgresAccountRepository::new(pool);

    let added = sut.add(any_params()).await.unwrap();

    let found = sut.load_by_email("any_email@mail.com").await.unwrap();
    assert_eq!(found, Some(added));

    let missing = sut.load_by_email("other_email@mail.com").await.unwrap();
    assert!(missing.is_none());
  }

  #[tokio::test]
  #[ignore = "requires Docker"]
  async fn test_update_access_token() {
    let (pool, _container) = setup_test_db().await;
    let sut = PostgresAccountRepository::new(pool);

    let added = sut.add(any_params()).await.unwrap();
    sut.update_access_token(&added.id, "any_token").await.unwrap();

    let account = sut
      .load_by_email("any_email@mail.com")
      .await
      .unwrap()
      .unwrap();
    assert_eq!(account.access_token.as_deref(), Some("any_token"));
  }

  #[tokio::test]
  #[ignore = "requires Docker"]
  async fn test_update_access_token_unknown_account() {
    let (pool, _container) = setup_test_db().await;
    let sut = PostgresAccountRepository::new(pool);

    let result = sut.update_access_token(&AccountId::new(), "any_token").await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));
  }
}
