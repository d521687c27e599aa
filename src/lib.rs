//! Authentication backend
//!
//! Exposes account registration and login over a JSON API. The crate follows
//! a hexagonal layout:
//!
//! - `domain` holds entities, errors, ports and use-case contracts
//! - `application` implements the use cases against the ports
//! - `adapters` translates HTTP requests into controller calls
//! - `infrastructure` provides PostgreSQL, Argon2, JWT and configuration

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
