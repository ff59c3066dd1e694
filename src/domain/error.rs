//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `tokio`, `std::fs`, or `std::process`. All error types implement
//! `thiserror::Error` and convert to `anyhow::Error` via the `?` operator.

use thiserror::Error;

// ── Configuration errors ──────────────────────────────────────────────────────

/// Semantic violations found while resolving the agent configuration.
///
/// Each variant carries the offending raw input so the startup failure
/// message names exactly what was rejected.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Invalid runtime endpoint '{0}': not a valid URI")]
    RuntimeEndpoint(String),

    #[error("Invalid environment variable '{0}': expected KEY=VALUE")]
    EnvVar(String),
}

// ── Host identity errors ──────────────────────────────────────────────────────

/// Failures while querying the local host name for agent-name defaulting.
///
/// All variants are fatal: there is no silent fallback to an empty or
/// placeholder agent name.
#[derive(Debug, Error)]
pub enum HostIdentityError {
    #[error("hostname query failed: {0}")]
    QueryFailed(String),

    #[error("hostname query returned empty output")]
    EmptyHostname,

    #[error("hostname query timed out after {0}s")]
    Timeout(u64),
}
