pub mod controllers;
pub mod decorators;
pub mod dtos;
pub mod errors;
pub mod factories;
pub mod helpers;
pub mod middleware;
pub mod protocols;
pub mod route_adapter;
pub mod routes;
pub mod validation;

// Re-export commonly used types
pub use controllers::{LoginController, SignUpController};
pub use decorators::LogControllerDecorator;
pub use dtos::{AccountResponse, ErrorResponse, LoginResponse};
pub use errors::ApiError;
pub use factories::{make_login_controller, make_signup_controller};
pub use middleware::{RequestId, RequestIdMiddleware};
pub use protocols::{Controller, ControllerRequest, ControllerResponse, ResponseBody};
pub use routes::configure_account_routes;
