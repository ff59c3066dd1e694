//! Agent configuration entity and pure validation functions.
//!
//! This module is intentionally free of I/O, async, and external layer
//! imports. All functions take data in and return data out.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;
use url::Url;

use crate::domain::error::ConfigurationError;

// ── Defaults ─────────────────────────────────────────────────────────────────

/// Default coordination-service connection string.
pub const DEFAULT_COORDINATION_ENDPOINT: &str = "localhost:2181";

/// Default coordination session timeout in milliseconds.
pub const DEFAULT_SESSION_TIMEOUT_MS: u64 = 60_000;

/// Default coordination connection timeout in milliseconds.
pub const DEFAULT_CONNECTION_TIMEOUT_MS: u64 = 15_000;

/// Default metrics reporter port. `0` disables the reporter.
pub const DEFAULT_METRICS_PORT: u16 = 4952;

/// Default container runtime endpoint.
pub const DEFAULT_RUNTIME_ENDPOINT: &str = "http://localhost:4160";

/// Default directory for persisting agent state locally.
pub const DEFAULT_STATE_DIR: &str = ".";

// ── Configuration entity ─────────────────────────────────────────────────────

/// Resolved runtime configuration for one agent process.
///
/// Built exactly once at startup by [`crate::application::resolver::resolve`]
/// and treated as immutable afterwards: the runtime reads it by reference and
/// nothing mutates it. Construction is all-or-nothing — a partially resolved
/// configuration is never observable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentConfig {
    /// Agent instance name. Defaults to the local host name.
    pub name: String,
    /// Coordination-service connection string (opaque pass-through).
    pub coordination_endpoint: String,
    /// Coordination session timeout in milliseconds.
    pub session_timeout_ms: u64,
    /// Coordination connection timeout in milliseconds.
    pub connection_timeout_ms: u64,
    /// Deployment site tag, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    /// Metrics reporter port. `0` means disabled.
    pub metrics_port: u16,
    /// Environment variables injected into every managed workload.
    pub env_vars: HashMap<String, String>,
    /// Container runtime endpoint. Syntactically valid as a URI; stored
    /// verbatim as supplied.
    pub runtime_endpoint: String,
    /// True only if metrics collection was explicitly opted out of.
    pub inhibit_metrics: bool,
    /// `host:port` target for syslog redirection of workload output, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog_redirect: Option<String>,
    /// Directory for persisting agent state. Not checked for existence here;
    /// the runtime deals with creation and writability.
    pub state_dir: PathBuf,
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Checks that `endpoint` is a syntactically valid URI.
///
/// Syntax only — no connectivity or reachability check happens at
/// configuration time.
///
/// # Errors
///
/// Returns [`ConfigurationError::RuntimeEndpoint`] naming the offending
/// value if it does not parse as a URI.
pub fn validate_runtime_endpoint(endpoint: &str) -> Result<()> {
    Url::parse(endpoint)
        .map_err(|_| ConfigurationError::RuntimeEndpoint(endpoint.to_string()))?;
    Ok(())
}

/// Folds grouped `KEY=VALUE` tokens into a single name-to-value mapping.
///
/// `groups` is one inner vector per `--env` occurrence; groups are flattened
/// in declaration order. Each token is split on the first `=` only, so values
/// may themselves contain `=`. Duplicate names resolve last-write-wins,
/// silently — an explicit policy, not an accident.
///
/// # Errors
///
/// Returns [`ConfigurationError::EnvVar`] naming the first token that
/// contains no `=`.
pub fn fold_env_vars(groups: &[Vec<String>]) -> Result<HashMap<String, String>> {
    let mut vars = HashMap::new();
    for group in groups {
        for token in group {
            let (name, value) = token
                .split_once('=')
                .ok_or_else(|| ConfigurationError::EnvVar(token.clone()))?;
            vars.insert(name.to_string(), value.to_string());
        }
    }
    Ok(vars)
}

// ── Unit tests ───────────────────────────────────────────────────────────────
