use actix_web::web;
use std::sync::Arc;

use super::protocols::Controller;
use super::route_adapter::adapt_route;

/// Configure account routes
///
/// Mounts the signup and login endpoints under the provided scope.
/// All routes are prefixed with the scope path (e.g., /api).
///
/// # Routes
///
/// - POST /signup - Register a new account
/// - POST /login - Authenticate and receive an access token
///
/// # Arguments
///
/// * `signup_controller` - Controller handling registration
/// * `login_controller` - Controller handling login
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// use std::sync::Arc;
/// # use authgate::adapters::http::{Controller, routes::configure_account_routes};
///
/// # fn example(signup: Arc<dyn Controller>, login: Arc<dyn Controller>) {
/// let app = App::new().service(
///   web::scope("/api").configure(|cfg| configure_account_routes(cfg, signup, login)),
/// );
/// # }
/// ```
pub fn configure_account_routes(
  cfg: &mut web::ServiceConfig,
  signup_controller: Arc<dyn Controller>,
  login_controller: Arc<dyn Controller>,
) {
  cfg
    .route("/signup", adapt_route(web::post(), signup_controller))
    .route("/login", adapt_route(web::post(), login_controller));
}
