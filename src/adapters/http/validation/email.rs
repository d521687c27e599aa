use serde_json::Value;
use std::sync::Arc;

use super::Validation;
use crate::adapters::http::errors::ApiError;

/// Email format check, implemented in the infrastructure layer
pub trait EmailValidator: Send + Sync {
  fn is_valid(&self, email: &str) -> bool;
}

/// Fails with `InvalidParam` when the field is not an acceptable email
pub struct EmailValidation {
  field: String,
  email_validator: Arc<dyn EmailValidator>,
}

impl EmailValidation {
  pub fn new(field: impl Into<String>, email_validator: Arc<dyn EmailValidator>) -> Self {
    Self {
      field: field.into(),
      email_validator,
    }
  }
}

impl Validation for EmailValidation {
  fn validate(&self, input: &Value) -> Option<ApiError> {
    match input.get(&self.field).and_then(Value::as_str) {
      Some(email) if self.email_validator.is_valid(email) => None,
      _ => Some(ApiError::InvalidParam(self.field.clone())),
    }
  }
}
