use async_trait::async_trait;

use super::entities::{Account, AccountId, AddAccountParams};
use super::errors::{HashError, RepositoryError, TokenError};

/// One-way password hashing used at registration
#[async_trait]
pub trait Hasher: Send + Sync {
  /// Hashes a plain text password
  async fn hash(&self, plaintext: &str) -> Result<String, HashError>;
}

/// Password comparison used at login
#[async_trait]
pub trait HashComparer: Send + Sync {
  /// Returns `true` when `plaintext` matches `hash`
  async fn compare(&self, plaintext: &str, hash: &str) -> Result<bool, HashError>;
}

/// Access token issuance
#[async_trait]
pub trait TokenIssuer: Send + Sync {
  /// Issues a token whose subject is the given account
  async fn issue(&self, subject: &AccountId) -> Result<String, TokenError>;
}

/// Persists newly registered accounts
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
  /// Stores the account and returns it with its generated identifier
  async fn add(&self, params: AddAccountParams) -> Result<Account, RepositoryError>;
}

/// Looks accounts up by email
#[async_trait]
pub trait LoadAccountByEmailRepository: Send + Sync {
  /// Returns `None` when no account uses this email
  async fn load_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError>;
}

/// Stores the access token issued on login
#[async_trait]
pub trait UpdateAccessTokenRepository: Send + Sync {
  /// Overwrites the account's access token
  async fn update_access_token(
    &self,
    id: &AccountId,
    token: &str,
  ) -> Result<(), RepositoryError>;
}

/// Records diagnostic traces of server faults
#[async_trait]
pub trait LogErrorRepository: Send + Sync {
  async fn log_error(&self, trace: &str) -> Result<(), RepositoryError>;
}
