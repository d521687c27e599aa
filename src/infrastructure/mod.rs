//! Infrastructure layer
//!
//! Concrete implementations of the account ports: PostgreSQL persistence,
//! Argon2 hashing, JWT issuance and email format checks, plus configuration.

pub mod config;
pub mod persistence;
pub mod security;
pub mod validation;
