use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of an account
///
/// Repositories store it natively as a `UUID` column, so the same value is
/// used for lookups, token subjects and access-token updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
  /// Generates a new random identifier
  pub fn new() -> Self {
    Self(Uuid::new_v4())
  }

  /// Wraps an existing UUID
  pub fn from_uuid(id: Uuid) -> Self {
    Self(id)
  }

  /// Returns the underlying UUID
  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl Default for AccountId {
  fn default() -> Self {
    Self::new()
  }
}

impl From<Uuid> for AccountId {
  fn from(id: Uuid) -> Self {
    Self(id)
  }
}

impl fmt::Display for AccountId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Account entity as stored by the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
  /// Unique identifier for the account
  pub id: AccountId,
  /// Display name
  pub name: String,
  /// Email address (unique)
  pub email: String,
  /// Hashed password, never the raw input
  pub password: String,
  /// Access token issued by the last successful login
  pub access_token: Option<String>,
}

impl Account {
  /// Creates an account from database fields (for reconstruction)
  pub fn from_db(
    id: AccountId,
    name: String,
    email: String,
    password: String,
    access_token: Option<String>,
  ) -> Self {
    Self {
      id,
      name,
      email,
      password,
      access_token,
    }
  }
}

/// Fields needed to register an account
///
/// The add-account use case receives the raw password here and hands the
/// repository a copy where `password` holds the hash.
#[derive(Clone, PartialEq, Eq)]
pub struct AddAccountParams {
  pub name: String,
  pub email: String,
  pub password: String,
}

impl AddAccountParams {
  pub fn new(
    name: impl Into<String>,
    email: impl Into<String>,
    password: impl Into<String>,
  ) -> Self {
    Self {
      name: name.into(),
      email: email.into(),
      password: password.into(),
    }
  }

  /// Returns the same fields with the password replaced
  pub fn with_password(self, password: String) -> Self {
    Self { password, ..self }
  }
}

impl fmt::Debug for AddAccountParams {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AddAccountParams")
      .field("name", &self.name)
      .field("email", &self.email)
      .field("password", &"***")
      .finish()
  }
}

/// Credentials submitted on login
#[derive(Clone, PartialEq, Eq)]
pub struct AuthenticationParams {
  pub email: String,
  pub password: String,
}

impl AuthenticationParams {
  pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
    Self {
      email: email.into(),
      password: password.into(),
    }
  }
}

impl fmt::Debug for AuthenticationParams {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AuthenticationParams")
      .field("email", &self.email)
      .field("password", &"***")
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_with_password_keeps_other_fields() {
    let params = AddAccountParams::new("any_name", "any_email@mail.com", "any_password");
    let hashed = params.with_password("hashed_password".to_string());

    assert_eq!(hashed.name, "any_name");
    assert_eq!(hashed.email, "any_email@mail.com");
    assert_eq!(hashed.password, "hashed_password");
  }

  #[test]
  fn test_debug_hides_passwords() {
    let add = AddAccountParams::new("any_name", "any_email@mail.com", "any_password");
    let auth = AuthenticationParams::new("any_email@mail.com", "any_password");

    assert!(!format!("{:?}", add).contains("any_password"));
    assert!(!format!("{:?}", auth).contains("any_password"));
  }

  #[test]
  fn test_account_id_serializes_as_plain_uuid() {
    let uuid = Uuid::new_v4();
    let id = AccountId::from_uuid(uuid);

    let json = serde_json::to_value(id).unwrap();
    assert_eq!(json, serde_json::Value::String(uuid.to_string()));
    assert_eq!(id.to_string(), uuid.to_string());
  }

  #[test]
  fn test_account_ids_are_unique() {
    assert_ne!(AccountId::new(), AccountId::new());
  }
}
