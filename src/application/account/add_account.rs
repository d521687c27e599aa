use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::account::entities::{Account, AddAccountParams};
use crate::domain::account::errors::AccountError;
use crate::domain::account::ports::{AddAccountRepository, Hasher};
use crate::domain::account::usecases::AddAccount;

/// Use case for registering a new account
pub struct AddAccountUseCase {
  hasher: Arc<dyn Hasher>,
  add_account_repository: Arc<dyn AddAccountRepository>,
}

impl AddAccountUseCase {
  /// Creates a new instance of AddAccountUseCase
  pub fn new(
    hasher: Arc<dyn Hasher>,
    add_account_repository: Arc<dyn AddAccountRepository>,
  ) -> Self {
    Self {
      hasher,
      add_account_repository,
    }
  }
}

#[async_trait]
impl AddAccount for AddAccountUseCase {
  /// Executes the registration use case
  ///
  /// # Arguments
  /// * `params` - Account fields with the raw password
  ///
  /// # Returns
  /// The stored `Account`, including its generated identifier
  ///
  /// # Errors
  /// Returns `AccountError::Hash` if hashing fails and
  /// `AccountError::Repository` if the account cannot be stored. Nothing is
  /// rolled back.
  async fn add(&self, params: AddAccountParams) -> Result<Account, AccountError> {
    let hashed_password = self.hasher.hash(&params.password).await?;

    let account = self
      .add_account_repository
      .add(params.with_password(hashed_password))
      .await?;

    tracing::info!(account_id = %account.id, "Account registered");

    Ok(account)
  }
}
