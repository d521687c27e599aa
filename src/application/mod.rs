//! Application layer
//!
//! This layer contains use cases that orchestrate the account ports to
//! implement signup and login. Use cases receive their collaborators as trait
//! objects so adapters can be swapped without touching the workflow.

pub mod account;
