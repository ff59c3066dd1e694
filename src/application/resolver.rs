//! Configuration resolution — parsed arguments in, validated config out.
//!
//! Runs exactly once per process lifetime, strictly before any other
//! subsystem starts. Pure apart from the single host-name query made when no
//! explicit agent name was supplied.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::HostIdentity;
use crate::cli::AgentArgs;
use crate::domain::config::{AgentConfig, fold_env_vars, validate_runtime_endpoint};

/// Resolves the parsed command-line arguments into one immutable
/// [`AgentConfig`], or fails with the first semantic violation.
///
/// All-or-nothing: either every field resolves or the whole resolution
/// fails; no caller ever sees a half-built configuration.
///
/// # Errors
///
/// Returns a [`crate::domain::ConfigurationError`] for a malformed runtime
/// endpoint or a `KEY=VALUE` token without `=`, and a
/// [`crate::domain::HostIdentityError`] when name defaulting fails.
pub async fn resolve(args: &AgentArgs, host: &impl HostIdentity) -> Result<AgentConfig> {
    validate_runtime_endpoint(&args.runtime_endpoint)?;

    // clap appends `--env` occurrences in declaration order, so the tokens
    // arrive here pre-flattened as a single group.
    let env_vars = fold_env_vars(std::slice::from_ref(&args.env))?;

    let name = match &args.name {
        Some(name) => name.clone(),
        None => host.hostname().await?.trim().to_string(),
    };

    Ok(AgentConfig {
        name,
        coordination_endpoint: args.coordination.clone(),
        session_timeout_ms: args.session_timeout,
        connection_timeout_ms: args.connection_timeout,
        site: args.site.clone(),
        metrics_port: args.metrics_port,
        env_vars,
        runtime_endpoint: args.runtime_endpoint.clone(),
        // Absence of the flag must read as false, never as "explicit false".
        inhibit_metrics: args.no_metrics == Some(true),
        syslog_redirect: args.syslog_redirect_to.clone(),
        state_dir: PathBuf::from(&args.state_dir),
    })
}
