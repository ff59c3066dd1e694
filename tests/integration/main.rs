//! Integration tests for the corral agent binary.
//!
//! These tests spawn the actual binary and test end-to-end behavior: flag
//! parsing, configuration resolution, the effective-config JSON dump, and
//! startup failure modes.

mod agent_cli;
