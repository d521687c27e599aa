pub mod entities;
pub mod errors;
pub mod ports;
pub mod usecases;

// Re-export commonly used types
pub use entities::{Account, AccountId, AddAccountParams, AuthenticationParams};
pub use errors::{AccountError, HashError, RepositoryError, TokenError};
pub use usecases::{AddAccount, Authentication};
