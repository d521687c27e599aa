use serde::Serialize;
use serde_json::Value;

use super::errors::ApiError;
use super::protocols::{ControllerResponse, ResponseBody};

/// 200 with the serialized payload
pub fn ok<T: Serialize>(data: &T) -> ControllerResponse {
  match serde_json::to_value(data) {
    Ok(payload) => ControllerResponse {
      status_code: 200,
      body: ResponseBody::Payload(payload),
    },
    Err(e) => server_error(e),
  }
}

/// 400 with the validation error
pub fn bad_request(error: ApiError) -> ControllerResponse {
  ControllerResponse {
    status_code: 400,
    body: ResponseBody::Error(error),
  }
}

/// 401 with a fixed descriptor
pub fn unauthorized() -> ControllerResponse {
  ControllerResponse {
    status_code: 401,
    body: ResponseBody::Error(ApiError::Unauthorized),
  }
}

/// 500 carrying the fault's trace
pub fn server_error(error: impl Into<anyhow::Error>) -> ControllerResponse {
  ControllerResponse {
    status_code: 500,
    body: ResponseBody::Error(ApiError::server_error(error)),
  }
}

/// Reads a string field from a validated body
///
/// Presence is checked by the validation composite; a value of another JSON
/// type is reported as an invalid param.
pub fn string_field(body: &Value, field: &str) -> Result<String, ApiError> {
  body
    .get(field)
    .and_then(Value::as_str)
    .map(str::to_string)
    .ok_or_else(|| ApiError::InvalidParam(field.to_string()))
}
