//! Domain layer — pure types and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `tokio`, `std::fs`, or `std::process`. All functions are synchronous and
//! take data in, returning data out.

pub mod config;
pub mod error;

pub use config::{AgentConfig, fold_env_vars, validate_runtime_endpoint};
pub use error::{ConfigurationError, HostIdentityError};
