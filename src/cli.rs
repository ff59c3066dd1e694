//! CLI argument parsing with clap derive.
//!
//! This is the argument schema only — syntactic parsing, typed coercion, and
//! defaulting of literal values. Semantic validation (URI syntax, `KEY=VALUE`
//! splitting, name defaulting) happens in
//! [`crate::application::resolver::resolve`].

use clap::{ArgAction, Parser};

use crate::domain::config::{
    DEFAULT_CONNECTION_TIMEOUT_MS, DEFAULT_COORDINATION_ENDPOINT, DEFAULT_METRICS_PORT,
    DEFAULT_RUNTIME_ENDPOINT, DEFAULT_SESSION_TIMEOUT_MS, DEFAULT_STATE_DIR,
};

/// Corral agent — resolves and validates the agent runtime configuration
#[derive(Debug, Parser)]
#[command(name = "corral-agent", version)]
pub struct AgentArgs {
    /// Agent name. Defaults to the local host name.
    #[arg(long)]
    pub name: Option<String>,

    /// Coordination service connection string.
    #[arg(long, value_name = "HOST:PORT", default_value = DEFAULT_COORDINATION_ENDPOINT)]
    pub coordination: String,

    /// Coordination session timeout in milliseconds.
    #[arg(long, value_name = "MILLIS", default_value_t = DEFAULT_SESSION_TIMEOUT_MS)]
    pub session_timeout: u64,

    /// Coordination connection timeout in milliseconds.
    #[arg(long, value_name = "MILLIS", default_value_t = DEFAULT_CONNECTION_TIMEOUT_MS)]
    pub connection_timeout: u64,

    /// Deployment site tag.
    #[arg(long, env = "CORRAL_SITE")]
    pub site: Option<String>,

    /// Metrics reporter port (0 = disabled).
    #[arg(long, value_name = "PORT", default_value_t = DEFAULT_METRICS_PORT)]
    pub metrics_port: u16,

    /// Container runtime endpoint.
    #[arg(long, value_name = "URI", default_value = DEFAULT_RUNTIME_ENDPOINT)]
    pub runtime_endpoint: String,

    /// Environment variables passed down to all managed workloads.
    /// Repeatable; each occurrence takes one or more KEY=VALUE tokens.
    /// Occurrences append in declaration order.
    #[arg(long = "env", value_name = "KEY=VALUE", num_args = 1.., action = ArgAction::Append)]
    pub env: Vec<String>,

    /// Redirect workload stdout/stderr to syslog running at host:port.
    #[arg(long, value_name = "HOST:PORT")]
    pub syslog_redirect_to: Option<String>,

    /// Turn off all collection and reporting of metrics.
    /// Absence is distinct from an explicit `--no-metrics=false`.
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub no_metrics: Option<bool>,

    /// Directory for persisting agent state locally.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_STATE_DIR)]
    pub state_dir: String,
}

// ── Unit tests ───────────────────────────────────────────────────────────────
