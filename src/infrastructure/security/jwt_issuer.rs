use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::account::entities::AccountId;
use crate::domain::account::errors::TokenError;
use crate::domain::account::ports::TokenIssuer;

/// Claims carried by an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
  /// Account identifier
  pub sub: Uuid,
  pub iat: i64,
  pub exp: i64,
}

/// HS256 access token issuer
pub struct JwtTokenIssuer {
  encoding_key: EncodingKey,
  ttl: Duration,
}

impl JwtTokenIssuer {
  /// Creates an issuer signing with `secret`; tokens expire after `ttl_seconds`
  pub fn new(secret: &str, ttl_seconds: i64) -> Result<Self, TokenError> {
    if secret.is_empty() {
      return Err(TokenError::InvalidKey(
        "JWT secret must not be empty".to_string(),
      ));
    }
    let ttl = Duration::try_seconds(ttl_seconds)
      .filter(|ttl| *ttl > Duration::zero())
      .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
      .ok_or_else(|| {
        TokenError::InvalidKey(format!(
          "Token lifetime out of range: {} seconds",
          ttl_seconds
        ))
      })?;

    Ok(Self {
      encoding_key: EncodingKey::from_secret(secret.as_bytes()),
      ttl,
    })
  }
}

#[async_trait]
impl TokenIssuer for JwtTokenIssuer {
  async fn issue(&self, subject: &AccountId) -> Result<String, TokenError> {
    let now = Utc::now();
    let claims = AccessTokenClaims {
      sub: subject.as_uuid(),
      iat: now.timestamp(),
      exp: now
        .checked_add_signed(self.ttl)
        .ok_or_else(|| TokenError::SigningFailed("Token expiry overflowed".to_string()))?
        .timestamp(),
    };

    encode(&Header::default(), &claims, &self.encoding_key)
      .map_err(|e| TokenError::SigningFailed(e.to_string()))
  }
}
