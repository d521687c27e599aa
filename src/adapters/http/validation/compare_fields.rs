use serde_json::Value;

use super::Validation;
use crate::adapters::http::errors::ApiError;

/// Fails with `InvalidParam(field_to_compare)` when two fields differ
pub struct CompareFieldsValidation {
  field: String,
  field_to_compare: String,
}

impl CompareFieldsValidation {
  pub fn new(field: impl Into<String>, field_to_compare: impl Into<String>) -> Self {
    Self {
      field: field.into(),
      field_to_compare: field_to_compare.into(),
    }
  }
}

impl Validation for CompareFieldsValidation {
  fn validate(&self, input: &Value) -> Option<ApiError> {
    if input.get(&self.field) != input.get(&self.field_to_compare) {
      return Some(ApiError::InvalidParam(self.field_to_compare.clone()));
    }
    None
  }
}
