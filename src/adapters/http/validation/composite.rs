use serde_json::Value;

use super::Validation;
use crate::adapters::http::errors::ApiError;

/// Ordered sequence of validators that stops at the first failure
pub struct ValidationComposite {
  validations: Vec<Box<dyn Validation>>,
}

impl ValidationComposite {
  pub fn new(validations: Vec<Box<dyn Validation>>) -> Self {
    Self { validations }
  }
}

impl Validation for ValidationComposite {
  fn validate(&self, input: &Value) -> Option<ApiError> {
    self
      .validations
      .iter()
      .find_map(|validation| validation.validate(input))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;
  use std::sync::Arc;
  use std::sync::atomic::{AtomicUsize, Ordering};

  struct ValidationStub {
    error: Option<ApiError>,
    calls: Arc<AtomicUsize>,
  }

  impl Validation for ValidationStub {
    fn validate(&self, _input: &Value) -> Option<ApiError> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      self.error.clone()
    }
  }

  fn stub(error: Option<ApiError>, calls: &Arc<AtomicUsize>) -> Box<dyn Validation> {
    Box::new(ValidationStub {
      error,
      calls: calls.clone(),
    })
  }

  #[test]
  fn test_returns_error_when_a_validation_fails() {
    let calls = Arc::new(AtomicUsize::new(0));
    let sut = ValidationComposite::new(vec![
      stub(None, &calls),
      stub(Some(ApiError::MissingParam("field".to_string())), &calls),
    ]);

    let error = sut.validate(&json!({ "field": "any_value" }));

    assert_eq!(error, Some(ApiError::MissingParam("field".to_string())));
  }

  #[test]
  fn test_returns_first_error_and_stops() {
    let first_calls = Arc::new(AtomicUsize::new(0));
    let later_calls = Arc::new(AtomicUsize::new(0));
    let sut = ValidationComposite::new(vec![
      stub(Some(ApiError::InvalidParam("first".to_string())), &first_calls),
      stub(Some(ApiError::MissingParam("second".to_string())), &later_calls),
    ]);

    let error = sut.validate(&json!({}));

    assert_eq!(error, Some(ApiError::InvalidParam("first".to_string())));
    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(later_calls.load(Ordering::SeqCst), 0);
  }

  #[test]
  fn test_returns_none_when_all_pass() {
    let calls = Arc::new(AtomicUsize::new(0));
    let sut = ValidationComposite::new(vec![stub(None, &calls), stub(None, &calls)]);

    assert!(sut.validate(&json!({ "field": "any_value" })).is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
  }

  #[test]
  fn test_repeated_validation_gives_same_result() {
    let calls = Arc::new(AtomicUsize::new(0));
    let sut = ValidationComposite::new(vec![
      stub(None, &calls),
      stub(Some(ApiError::MissingParam("email".to_string())), &calls),
    ]);
    let input = json!({ "name": "any_name" });

    let first = sut.validate(&input);
    let second = sut.validate(&input);

    assert_eq!(first, second);
    assert_eq!(input, json!({ "name": "any_name" }));
  }
}
