//! Corral agent entry point.
//!
//! Initialises tracing, parses command-line arguments, and resolves them into
//! the immutable runtime configuration. Resolution happens exactly once,
//! before anything else starts; any invalid input aborts startup with the
//! offending value on stderr. On success the effective configuration is
//! printed as JSON for the operator — the agent runtime itself lives outside
//! this crate and consumes [`corral_agent::domain::AgentConfig`] through the
//! library API.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use corral_agent::application::resolver;
use corral_agent::cli::AgentArgs;
use corral_agent::infra::UnameHostIdentity;

#[tokio::main]
async fn main() {
    let args = AgentArgs::parse();
    if let Err(e) = run(&args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: &AgentArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = resolver::resolve(args, &UnameHostIdentity::default()).await?;

    tracing::info!(
        name = %config.name,
        coordination_endpoint = %config.coordination_endpoint,
        runtime_endpoint = %config.runtime_endpoint,
        metrics_port = config.metrics_port,
        inhibit_metrics = config.inhibit_metrics,
        state_dir = %config.state_dir.display(),
        "configuration resolved"
    );

    let rendered =
        serde_json::to_string_pretty(&config).context("serializing effective configuration")?;
    println!("{rendered}");
    Ok(())
}
