use async_trait::async_trait;
use std::sync::Arc;

use crate::adapters::http::dtos::LoginResponse;
use crate::adapters::http::errors::ApiError;
use crate::adapters::http::helpers::{bad_request, ok, server_error, string_field, unauthorized};
use crate::adapters::http::protocols::{Controller, ControllerRequest, ControllerResponse};
use crate::adapters::http::validation::Validation;
use crate::domain::account::entities::AuthenticationParams;
use crate::domain::account::usecases::Authentication;

/// Controller for `POST /login`
///
/// Body: `{ email, password }`
/// Response: `{ accessToken }` with status 200, or 401 when the credentials
/// do not match an account
pub struct LoginController {
  validation: Arc<dyn Validation>,
  authentication: Arc<dyn Authentication>,
}

impl LoginController {
  pub fn new(validation: Arc<dyn Validation>, authentication: Arc<dyn Authentication>) -> Self {
    Self {
      validation,
      authentication,
    }
  }
}

#[async_trait]
impl Controller for LoginController {
  async fn handle(&self, request: ControllerRequest) -> ControllerResponse {
    if let Some(error) = self.validation.validate(&request.body) {
      return bad_request(error);
    }

    let credentials = match credentials(&request) {
      Ok(credentials) => credentials,
      Err(error) => return bad_request(error),
    };

    match self.authentication.auth(credentials).await {
      Ok(Some(access_token)) => ok(&LoginResponse { access_token }),
      Ok(None) => unauthorized(),
      Err(error) => server_error(error),
    }
  }
}

fn credentials(request: &ControllerRequest) -> Result<AuthenticationParams, ApiError> {
  Ok(AuthenticationParams::new(
    string_field(&request.body, "email")?,
    string_field(&request.body, "password")?,
  ))
}
