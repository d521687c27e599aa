use async_trait::async_trait;
use std::sync::Arc;

use crate::adapters::http::dtos::AccountResponse;
use crate::adapters::http::errors::ApiError;
use crate::adapters::http::helpers::{bad_request, ok, server_error, string_field};
use crate::adapters::http::protocols::{Controller, ControllerRequest, ControllerResponse};
use crate::adapters::http::validation::Validation;
use crate::domain::account::entities::AddAccountParams;
use crate::domain::account::errors::{AccountError, RepositoryError};
use crate::domain::account::usecases::AddAccount;

/// Controller for `POST /signup`
///
/// Body: `{ name, email, password, passwordConfirmation }`
/// Response: the created account with status 200
pub struct SignUpController {
  validation: Arc<dyn Validation>,
  add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
  pub fn new(validation: Arc<dyn Validation>, add_account: Arc<dyn AddAccount>) -> Self {
    Self {
      validation,
      add_account,
    }
  }
}

#[async_trait]
impl Controller for SignUpController {
  async fn handle(&self, request: ControllerRequest) -> ControllerResponse {
    if let Some(error) = self.validation.validate(&request.body) {
      return bad_request(error);
    }

    let params = match signup_params(&request) {
      Ok(params) => params,
      Err(error) => return bad_request(error),
    };

    match self.add_account.add(params).await {
      Ok(account) => ok(&AccountResponse::from(account)),
      Err(AccountError::Repository(RepositoryError::DuplicateKey(_))) => {
        bad_request(ApiError::InvalidParam("email".to_string()))
      }
      Err(error) => server_error(error),
    }
  }
}

fn signup_params(request: &ControllerRequest) -> Result<AddAccountParams, ApiError> {
  Ok(AddAccountParams::new(
    string_field(&request.body, "name")?,
    string_field(&request.body, "email")?,
    string_field(&request.body, "password")?,
  ))
}
