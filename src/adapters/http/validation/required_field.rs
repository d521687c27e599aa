use serde_json::Value;

use super::Validation;
use crate::adapters::http::errors::ApiError;

/// Fails with `MissingParam` when a field is absent or empty
pub struct RequiredFieldValidation {
  field: String,
}

impl RequiredFieldValidation {
  pub fn new(field: impl Into<String>) -> Self {
    Self {
      field: field.into(),
    }
  }
}

// null, false, 0 and "" count as missing
fn is_present(value: Option<&Value>) -> bool {
  match value {
    None | Some(Value::Null) | Some(Value::Bool(false)) => false,
    Some(Value::String(s)) => !s.is_empty(),
    Some(Value::Number(n)) => n.as_f64() != Some(0.0),
    Some(_) => true,
  }
}

impl Validation for RequiredFieldValidation {
  fn validate(&self, input: &Value) -> Option<ApiError> {
    if is_present(input.get(&self.field)) {
      None
    } else {
      Some(ApiError::MissingParam(self.field.clone()))
    }
  }
}
