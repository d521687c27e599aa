use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use thiserror::Error;

use super::dtos::ErrorResponse;

/// API error descriptor placed in controller responses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
  /// A required field is absent or empty (400)
  #[error("Missing param: {0}")]
  MissingParam(String),

  /// A field is present but malformed (400)
  #[error("Invalid param: {0}")]
  InvalidParam(String),

  /// Credentials did not match an account (401)
  #[error("Unauthorized")]
  Unauthorized,

  /// Infrastructure fault (500)
  ///
  /// `trace` is kept for error logging and never written to clients.
  #[error("Internal server error")]
  ServerError { trace: String },
}

impl ApiError {
  /// Builds a server error whose trace lists the error and all its causes
  pub fn server_error(error: impl Into<anyhow::Error>) -> Self {
    let error: anyhow::Error = error.into();
    ApiError::ServerError {
      trace: format!("{:?}", error),
    }
  }

  /// Machine-readable error kind
  pub fn kind(&self) -> &'static str {
    match self {
      ApiError::MissingParam(_) => "missing_param",
      ApiError::InvalidParam(_) => "invalid_param",
      ApiError::Unauthorized => "unauthorized",
      ApiError::ServerError { .. } => "server_error",
    }
  }

  /// Diagnostic trace of a server error
  pub fn trace(&self) -> Option<&str> {
    match self {
      ApiError::ServerError { trace } => Some(trace),
      _ => None,
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::MissingParam(_) | ApiError::InvalidParam(_) => StatusCode::BAD_REQUEST,
      ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
      ApiError::ServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Display never includes the trace
    let error_response = ErrorResponse {
      error: self.kind().to_string(),
      message: self.to_string(),
    };

    HttpResponse::build(self.status_code())
      .content_type(ContentType::json())
      .json(error_response)
  }
}
