//! Account use cases
//!
//! Registration and login workflows composed from the account ports.

mod add_account;
mod authentication;

pub use add_account::AddAccountUseCase;
pub use authentication::AuthenticationUseCase;
