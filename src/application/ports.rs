//! Port trait definitions for the application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`.

use anyhow::Result;

/// Source of the local host's name, used when no explicit agent name is
/// supplied on the command line.
///
/// Querying host identity is an external side effect, so it lives behind a
/// port: production shells out to `uname -n`, tests substitute a fixed value.
#[allow(async_fn_in_trait)]
pub trait HostIdentity {
    /// Return the local host name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name cannot be obtained — failure here is
    /// fatal to startup, never silently defaulted.
    async fn hostname(&self) -> Result<String>;
}
