use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::account::entities::AuthenticationParams;
use crate::domain::account::errors::AccountError;
use crate::domain::account::ports::{
  HashComparer, LoadAccountByEmailRepository, TokenIssuer, UpdateAccessTokenRepository,
};
use crate::domain::account::usecases::Authentication;

/// Use case for logging an account in
///
/// Steps run strictly in order: look the account up by email, compare the
/// password with the stored hash, issue a token for the account id and store
/// it. An unknown email or a mismatching password ends the flow with `None`.
pub struct AuthenticationUseCase {
  load_account_by_email_repository: Arc<dyn LoadAccountByEmailRepository>,
  hash_comparer: Arc<dyn HashComparer>,
  token_issuer: Arc<dyn TokenIssuer>,
  update_access_token_repository: Arc<dyn UpdateAccessTokenRepository>,
}

impl AuthenticationUseCase {
  /// Creates a new instance of AuthenticationUseCase
  pub fn new(
    load_account_by_email_repository: Arc<dyn LoadAccountByEmailRepository>,
    hash_comparer: Arc<dyn HashComparer>,
    token_issuer: Arc<dyn TokenIssuer>,
    update_access_token_repository: Arc<dyn UpdateAccessTokenRepository>,
  ) -> Self {
    Self {
      load_account_by_email_repository,
      hash_comparer,
      token_issuer,
      update_access_token_repository,
    }
  }
}

#[async_trait]
impl Authentication for AuthenticationUseCase {
  async fn auth(&self, params: AuthenticationParams) -> Result<Option<String>, AccountError> {
    let Some(account) = self
      .load_account_by_email_repository
      .load_by_email(&params.email)
      .await?
    else {
      tracing::debug!("No account registered for the submitted email");
      return Ok(None);
    };

    let is_valid = self
      .hash_comparer
      .compare(&params.password, &account.password)
      .await?;

    if !is_valid {
      tracing::debug!(account_id = %account.id, "Password mismatch");
      return Ok(None);
    }

    let access_token = self.token_issuer.issue(&account.id).await?;

    self
      .update_access_token_repository
      .update_access_token(&account.id, &access_token)
      .await?;

    tracing::info!(account_id = %account.id, "Access token issued");

    Ok(Some(access_token))
  }
}
