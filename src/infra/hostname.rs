//! Production implementation of the `HostIdentity` port.

use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::HostIdentity;
use crate::domain::error::HostIdentityError;

/// Default timeout for the host-name query. Resolution happens before any
/// other subsystem starts, so a hung query would otherwise hang startup
/// forever.
pub const DEFAULT_HOSTNAME_TIMEOUT: Duration = Duration::from_secs(5);

/// `HostIdentity` backed by `uname -n`, with a bounded timeout and
/// guaranteed process kill.
pub struct UnameHostIdentity {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl UnameHostIdentity {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self::with_command("uname", &["-n"], timeout)
    }

    /// Query a different command. Tests substitute shell one-liners to drive
    /// the failure paths without depending on host state.
    #[must_use]
    pub fn with_command(program: &str, args: &[&str], timeout: Duration) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
            timeout,
        }
    }
}

impl Default for UnameHostIdentity {
    fn default() -> Self {
        Self::new(DEFAULT_HOSTNAME_TIMEOUT)
    }
}

impl HostIdentity for UnameHostIdentity {
    async fn hostname(&self) -> Result<String> {
        let child = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {}", self.program))?;

        let output = tokio::select! {
            output = child.wait_with_output() => {
                output.with_context(|| format!("waiting for {}", self.program))?
            }
            () = tokio::time::sleep(self.timeout) => {
                return Err(HostIdentityError::Timeout(self.timeout.as_secs()).into());
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(HostIdentityError::QueryFailed(stderr).into());
        }

        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if name.is_empty() {
            return Err(HostIdentityError::EmptyHostname.into());
        }
        Ok(name)
    }
}
