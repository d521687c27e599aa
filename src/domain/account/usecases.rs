use async_trait::async_trait;

use super::entities::{Account, AddAccountParams, AuthenticationParams};
use super::errors::AccountError;

/// Registers a new account
#[async_trait]
pub trait AddAccount: Send + Sync {
  /// Hashes the password and persists the account
  ///
  /// # Errors
  /// Returns `AccountError` when hashing or persistence fails
  async fn add(&self, params: AddAccountParams) -> Result<Account, AccountError>;
}

/// Authenticates an account by email and password
#[async_trait]
pub trait Authentication: Send + Sync {
  /// Returns the new access token, or `None` when the credentials do not match
  ///
  /// # Errors
  /// Returns `AccountError` only for infrastructure failures
  async fn auth(&self, params: AuthenticationParams) -> Result<Option<String>, AccountError>;
}
