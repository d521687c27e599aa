//! HTTP controllers
//!
//! Controllers validate the request body, call a use case and map the outcome
//! to a [`ControllerResponse`](super::protocols::ControllerResponse).

mod login;
mod signup;

pub use login::LoginController;
pub use signup::SignUpController;
