//! End-to-end tests against the `corral-agent` binary.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn corral() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("corral-agent"));
    cmd.env_remove("CORRAL_SITE");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Runs the binary with `argv`, expecting success, and parses the
/// effective-config JSON from stdout.
fn effective_config(argv: &[&str]) -> Value {
    let output = corral().args(argv).output().expect("binary runs");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is valid JSON")
}

// ── Help and version ─────────────────────────────────────────────────────────

#[test]
fn test_help_lists_every_flag() {
    corral()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("--coordination"))
        .stdout(predicate::str::contains("--session-timeout"))
        .stdout(predicate::str::contains("--connection-timeout"))
        .stdout(predicate::str::contains("--site"))
        .stdout(predicate::str::contains("--metrics-port"))
        .stdout(predicate::str::contains("--runtime-endpoint"))
        .stdout(predicate::str::contains("--env"))
        .stdout(predicate::str::contains("--syslog-redirect-to"))
        .stdout(predicate::str::contains("--no-metrics"))
        .stdout(predicate::str::contains("--state-dir"));
}

#[test]
fn test_version_flag_shows_version() {
    corral()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("corral-agent"));
}

// ── Default scenario ─────────────────────────────────────────────────────────

#[test]
fn test_default_scenario_effective_config() {
    let config = effective_config(&["--name", "agent1"]);

    assert_eq!(config["name"], "agent1");
    assert_eq!(config["coordination_endpoint"], "localhost:2181");
    assert_eq!(config["session_timeout_ms"], 60_000);
    assert_eq!(config["connection_timeout_ms"], 15_000);
    assert_eq!(config["metrics_port"], 4952);
    assert_eq!(config["runtime_endpoint"], "http://localhost:4160");
    assert_eq!(config["state_dir"], ".");
    assert_eq!(config["inhibit_metrics"], false);
    assert!(config.get("site").is_none());
    assert!(config.get("syslog_redirect").is_none());
}

#[test]
fn test_omitted_name_defaults_to_local_host_name() {
    let config = effective_config(&[]);
    let name = config["name"].as_str().expect("name is a string");

    assert!(!name.is_empty());
    assert_eq!(name, name.trim());
}

// ── Flag handling ────────────────────────────────────────────────────────────

#[test]
fn test_env_vars_fold_last_write_wins() {
    let config =
        effective_config(&["--name", "agent1", "--env", "A=1", "B=2", "--env", "A=3"]);

    assert_eq!(config["env_vars"]["A"], "3");
    assert_eq!(config["env_vars"]["B"], "2");
}

#[test]
fn test_no_metrics_flag_inhibits_metrics() {
    let config = effective_config(&["--name", "agent1", "--no-metrics"]);
    assert_eq!(config["inhibit_metrics"], true);
}

#[test]
fn test_site_falls_back_to_environment() {
    let output = corral()
        .env("CORRAL_SITE", "lon")
        .args(["--name", "agent1"])
        .output()
        .expect("binary runs");
    let config: Value = serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");

    assert_eq!(config["site"], "lon");
}

// ── Startup failures ─────────────────────────────────────────────────────────

#[test]
fn test_bad_env_token_aborts_startup_naming_the_token() {
    corral()
        .args(["--name", "agent1", "--env", "NOEQUALS"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("NOEQUALS"));
}

#[test]
fn test_bad_runtime_endpoint_aborts_startup_naming_the_value() {
    corral()
        .args(["--name", "agent1", "--runtime-endpoint", "not a uri"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a uri"));
}

#[test]
fn test_non_integer_metrics_port_is_a_usage_error() {
    // Type coercion failures come from the argument schema, exit code 2.
    corral()
        .args(["--name", "agent1", "--metrics-port", "many"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--metrics-port"));
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    corral().arg("--bogus").assert().code(2);
}
