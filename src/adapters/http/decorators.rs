use async_trait::async_trait;
use std::sync::Arc;

use super::protocols::{Controller, ControllerRequest, ControllerResponse};
use crate::domain::account::ports::LogErrorRepository;

/// Wraps a controller and records the trace of every server error
///
/// The inner response is returned untouched. The trace is written on a
/// spawned task so the response never waits on the log store, and a failing
/// write is only reported through `tracing`.
pub struct LogControllerDecorator {
  controller: Arc<dyn Controller>,
  log_error_repository: Arc<dyn LogErrorRepository>,
}

impl LogControllerDecorator {
  pub fn new(
    controller: Arc<dyn Controller>,
    log_error_repository: Arc<dyn LogErrorRepository>,
  ) -> Self {
    Self {
      controller,
      log_error_repository,
    }
  }
}

#[async_trait]
impl Controller for LogControllerDecorator {
  async fn handle(&self, request: ControllerRequest) -> ControllerResponse {
    let response = self.controller.handle(request).await;

    if response.status_code == 500 {
      if let Some(trace) = response.trace() {
        tracing::error!("Request failed with a server error: {}", trace);

        let trace = trace.to_string();
        let log_error_repository = Arc::clone(&self.log_error_repository);
        tokio::spawn(async move {
          if let Err(e) = log_error_repository.log_error(&trace).await {
            tracing::warn!("Failed to store error trace: {}", e);
          }
        });
      }
    }

    response
  }
}
