//! Request body validation
//!
//! Each validator checks one concern of the raw JSON body. A
//! [`ValidationComposite`] runs them in order and reports the first failure.

mod compare_fields;
mod composite;
mod email;
mod required_field;

use serde_json::Value;

use super::errors::ApiError;

pub use compare_fields::CompareFieldsValidation;
pub use composite::ValidationComposite;
pub use email::{EmailValidation, EmailValidator};
pub use required_field::RequiredFieldValidation;

/// A side-effect free check over a request body
pub trait Validation: Send + Sync {
  /// Returns `None` when the input passes
  fn validate(&self, input: &Value) -> Option<ApiError>;
}
