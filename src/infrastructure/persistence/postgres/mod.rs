pub mod account_repository;
pub mod log_error_repository;
pub mod pool;

pub use account_repository::PostgresAccountRepository;
pub use log_error_repository::PostgresLogErrorRepository;
pub use pool::{DatabaseSetupError, create_lazy_pool, run_migrations};
