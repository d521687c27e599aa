use validator::ValidateEmail;

use crate::adapters::http::validation::EmailValidator;

/// Email format check backed by the `validator` crate (HTML5 rules)
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidatorAdapter;

impl EmailValidatorAdapter {
  pub fn new() -> Self {
    Self
  }
}

impl EmailValidator for EmailValidatorAdapter {
  fn is_valid(&self, email: &str) -> bool {
    email.validate_email()
  }
}
