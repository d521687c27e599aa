use serde::Serialize;
use uuid::Uuid;

use crate::domain::account::entities::Account;

/// Account returned after a successful signup
///
/// Mirrors the stored account without its password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
  /// Unique identifier of the account
  pub id: Uuid,

  /// Display name
  pub name: String,

  /// Email address
  pub email: String,

  /// Last issued access token
  #[serde(skip_serializing_if = "Option::is_none")]
  pub access_token: Option<String>,
}

impl From<Account> for AccountResponse {
  fn from(account: Account) -> Self {
    Self {
      id: account.id.as_uuid(),
      name: account.name,
      email: account.email,
      access_token: account.access_token,
    }
  }
}

/// Response after a successful login
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
  /// Token identifying the authenticated account
  pub access_token: String,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,
}
