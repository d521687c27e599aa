use actix_web::{HttpResponse, Route, error::ResponseError, http::StatusCode, web};
use serde_json::{Map, Value};
use std::sync::Arc;

use super::protocols::{Controller, ControllerRequest, ControllerResponse, ResponseBody};

/// Binds a controller to an actix route
///
/// The raw body is parsed as JSON; anything unparseable is handed to the
/// controller as `{}` so validation reports the first missing field.
///
/// # Example
///
/// ```no_run
/// use actix_web::web;
/// use std::sync::Arc;
/// # use authgate::adapters::http::{Controller, route_adapter::adapt_route};
///
/// # fn example(cfg: &mut web::ServiceConfig, controller: Arc<dyn Controller>) {
/// cfg.route("/signup", adapt_route(web::post(), controller));
/// # }
/// ```
pub fn adapt_route(route: Route, controller: Arc<dyn Controller>) -> Route {
  route.to(move |body: web::Bytes| {
    let controller = Arc::clone(&controller);
    async move {
      let response = controller.handle(to_controller_request(&body)).await;
      to_http_response(response)
    }
  })
}

fn to_controller_request(body: &[u8]) -> ControllerRequest {
  let body = serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(Map::new()));
  ControllerRequest::new(body)
}

fn to_http_response(response: ControllerResponse) -> HttpResponse {
  let status =
    StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

  match response.body {
    ResponseBody::Payload(payload) => HttpResponse::build(status).json(payload),
    ResponseBody::Error(error) => {
      let mut http_response = error.error_response();
      *http_response.status_mut() = status;
      http_response
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::adapters::http::errors::ApiError;
  use crate::adapters::http::helpers::{bad_request, ok, server_error};
  use actix_web::{App, test};
  use async_trait::async_trait;
  use serde_json::json;
  use std::sync::Mutex;

  struct ControllerStub {
    response: ControllerResponse,
    requests: Mutex<Vec<ControllerRequest>>,
  }

  #[async_trait]
  impl Controller for ControllerStub {
    async fn handle(&self, request: ControllerRequest) -> ControllerResponse {
      self.requests.lock().unwrap().push(request);
      self.response.clone()
    }
  }

  fn stub(response: ControllerResponse) -> Arc<ControllerStub> {
    Arc::new(ControllerStub {
      response,
      requests: Mutex::new(Vec::new()),
    })
  }

  #[actix_web::test]
  async fn test_payload_is_written_as_json() {
    let controller = stub(ok(&json!({ "accessToken": "any_token" })));
    let app = test::init_service(
      App::new().route("/login", adapt_route(web::post(), controller.clone())),
    )
    .await;

    let req = test::TestRequest::post()
      .uri("/login")
      .set_json(json!({ "email": "any_email@mail.com" }))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "accessToken": "any_token" }));
    assert_eq!(
      controller.requests.lock().unwrap()[0].body,
      json!({ "email": "any_email@mail.com" })
    );
  }

  #[actix_web::test]
  async fn test_error_is_written_as_descriptor() {
    let controller = stub(bad_request(ApiError::MissingParam("email".to_string())));
    let app =
      test::init_service(App::new().route("/login", adapt_route(web::post(), controller))).await;

    let req = test::TestRequest::post()
      .uri("/login")
      .set_json(json!({}))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
      body,
      json!({ "error": "missing_param", "message": "Missing param: email" })
    );
  }

  #[actix_web::test]
  async fn test_server_error_trace_is_not_exposed() {
    let controller = stub(server_error(anyhow::anyhow!("connection refused")));
    let app =
      test::init_service(App::new().route("/signup", adapt_route(web::post(), controller))).await;

    let req = test::TestRequest::post()
      .uri("/signup")
      .set_json(json!({}))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = test::read_body(resp).await;
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("Internal server error"));
    assert!(!body.contains("connection refused"));
  }

  #[actix_web::test]
  async fn test_unparseable_body_becomes_empty_object() {
    let controller = stub(ok(&json!({})));
    let app = test::init_service(
      App::new().route("/signup", adapt_route(web::post(), controller.clone())),
    )
    .await;

    let req = test::TestRequest::post()
      .uri("/signup")
      .set_payload("not json")
      .to_request();
    test::call_service(&app, req).await;

    assert_eq!(controller.requests.lock().unwrap()[0].body, json!({}));
  }
}
