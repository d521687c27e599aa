use argon2::password_hash::SaltString;
use argon2::{
  Algorithm, Argon2, Params, Version,
  password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier},
};
use async_trait::async_trait;

use crate::domain::account::errors::HashError;
use crate::domain::account::ports::{HashComparer, Hasher};

/// Argon2id password hasher implementation
///
/// Defaults follow the OWASP baseline:
/// - Memory cost: 19 MiB (19456 KiB)
/// - Time cost: 2 iterations
/// - Parallelism: 1 lane
///
/// Hashing is CPU bound, so both operations run on the blocking thread pool.
#[derive(Clone)]
pub struct Argon2Hasher {
  argon2: Argon2<'static>,
}

impl Argon2Hasher {
  pub fn new() -> Result<Self, HashError> {
    Self::with_params(19456, 2, 1)
  }

  /// Creates a hasher with explicit cost parameters
  pub fn with_params(
    memory_cost_kib: u32,
    time_cost: u32,
    parallelism: u32,
  ) -> Result<Self, HashError> {
    let params = Params::new(memory_cost_kib, time_cost, parallelism, Some(32)).map_err(|e| {
      HashError::HashingFailed(format!("Failed to create Argon2 params: {}", e))
    })?;

    Ok(Self {
      argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
    })
  }
}

#[async_trait]
impl Hasher for Argon2Hasher {
  async fn hash(&self, plaintext: &str) -> Result<String, HashError> {
    let argon2 = self.argon2.clone();
    let plaintext = plaintext.to_owned();

    tokio::task::spawn_blocking(move || {
      let salt = SaltString::generate(&mut rand::rngs::OsRng);
      argon2
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| HashError::HashingFailed(format!("Failed to hash password: {}", e)))
    })
    .await
    .map_err(|e| HashError::HashingFailed(format!("Hashing task failed: {}", e)))?
  }
}

#[async_trait]
impl HashComparer for Argon2Hasher {
  /// Verification is constant time; a mismatch is `Ok(false)`, a malformed
  /// stored hash is an error.
  async fn compare(&self, plaintext: &str, hash: &str) -> Result<bool, HashError> {
    let argon2 = self.argon2.clone();
    let plaintext = plaintext.to_owned();
    let hash = hash.to_owned();

    tokio::task::spawn_blocking(move || {
      let parsed = PasswordHash::new(&hash)
        .map_err(|e| HashError::VerificationFailed(format!("Invalid hash format: {}", e)))?;

      match argon2.verify_password(plaintext.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(HashError::VerificationFailed(format!(
          "Password verification failed: {}",
          e
        ))),
      }
    })
    .await
    .map_err(|e| HashError::VerificationFailed(format!("Verification task failed: {}", e)))?
  }
}
