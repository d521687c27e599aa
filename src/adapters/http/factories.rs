//! Controller factories
//!
//! Assemble each controller with its validation rules and wrap it in the
//! error-logging decorator.

use std::sync::Arc;

use super::controllers::{LoginController, SignUpController};
use super::decorators::LogControllerDecorator;
use super::protocols::Controller;
use super::validation::{
  CompareFieldsValidation, EmailValidation, EmailValidator, RequiredFieldValidation, Validation,
  ValidationComposite,
};
use crate::domain::account::ports::LogErrorRepository;
use crate::domain::account::usecases::{AddAccount, Authentication};

fn required_fields(fields: &[&str]) -> Vec<Box<dyn Validation>> {
  fields
    .iter()
    .map(|field| Box::new(RequiredFieldValidation::new(*field)) as Box<dyn Validation>)
    .collect()
}

/// Signup rules: all fields present, matching confirmation, valid email
pub fn make_signup_validation(email_validator: Arc<dyn EmailValidator>) -> ValidationComposite {
  let mut validations = required_fields(&["name", "email", "password", "passwordConfirmation"]);
  validations.push(Box::new(CompareFieldsValidation::new(
    "password",
    "passwordConfirmation",
  )));
  validations.push(Box::new(EmailValidation::new("email", email_validator)));
  ValidationComposite::new(validations)
}

/// Login rules: email and password present, valid email
pub fn make_login_validation(email_validator: Arc<dyn EmailValidator>) -> ValidationComposite {
  let mut validations = required_fields(&["email", "password"]);
  validations.push(Box::new(EmailValidation::new("email", email_validator)));
  ValidationComposite::new(validations)
}

pub fn make_signup_controller(
  add_account: Arc<dyn AddAccount>,
  email_validator: Arc<dyn EmailValidator>,
  log_error_repository: Arc<dyn LogErrorRepository>,
) -> Arc<dyn Controller> {
  let controller = SignUpController::new(
    Arc::new(make_signup_validation(email_validator)),
    add_account,
  );
  Arc::new(LogControllerDecorator::new(
    Arc::new(controller),
    log_error_repository,
  ))
}

pub fn make_login_controller(
  authentication: Arc<dyn Authentication>,
  email_validator: Arc<dyn EmailValidator>,
  log_error_repository: Arc<dyn LogErrorRepository>,
) -> Arc<dyn Controller> {
  let controller = LoginController::new(
    Arc::new(make_login_validation(email_validator)),
    authentication,
  );
  Arc::new(LogControllerDecorator::new(
    Arc::new(controller),
    log_error_repository,
  ))
}
