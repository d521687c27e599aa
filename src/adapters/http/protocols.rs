use async_trait::async_trait;
use serde_json::Value;

use super::errors::ApiError;

/// Framework-independent request handed to a controller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerRequest {
  /// Parsed JSON body (`{}` when the client sent nothing usable)
  pub body: Value,
}

impl ControllerRequest {
  pub fn new(body: Value) -> Self {
    Self { body }
  }
}

/// Body of a controller response
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
  /// Domain payload, sent with 200
  Payload(Value),
  /// Error descriptor, sent with 400, 401 or 500
  Error(ApiError),
}

/// Framework-independent response produced by a controller
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerResponse {
  pub status_code: u16,
  pub body: ResponseBody,
}

impl ControllerResponse {
  /// Returns the error descriptor, if any
  pub fn error(&self) -> Option<&ApiError> {
    match &self.body {
      ResponseBody::Error(error) => Some(error),
      ResponseBody::Payload(_) => None,
    }
  }

  /// Returns the diagnostic trace carried by a server error
  pub fn trace(&self) -> Option<&str> {
    self.error().and_then(ApiError::trace)
  }
}

/// A request handler that never fails
///
/// Every fault is folded into the returned response, so decorators can
/// observe them uniformly.
#[async_trait]
pub trait Controller: Send + Sync {
  async fn handle(&self, request: ControllerRequest) -> ControllerResponse;
}
