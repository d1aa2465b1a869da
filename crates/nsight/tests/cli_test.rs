//! Integration tests for the `nsight` CLI binary.
//!
//! These validate argument parsing, usage errors, and offline failure
//! modes -- nothing here talks to a live dashboard.
#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `nsight` binary with env isolation.
///
/// Clears all `NSIGHT_*` env vars, points HOME at a scratch directory,
/// and runs from a scratch working directory so no stray `.env` or
/// config file leaks into the test.
fn nsight_cmd(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("nsight").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env_remove("NSIGHT_PROFILE")
        .env_remove("NSIGHT_SERVER")
        .env_remove("NSIGHT_API_KEY")
        .env_remove("NSIGHT_TIMEOUT");
    cmd
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn no_args_shows_usage() {
    let dir = tempfile::tempdir().unwrap();
    let output = nsight_cmd(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "expected usage exit code");
    let text = String::from_utf8_lossy(&output.stderr).to_string();
    assert!(text.contains("Usage"), "expected 'Usage' in output:\n{text}");
}

#[test]
fn help_lists_services() {
    let dir = tempfile::tempdir().unwrap();
    nsight_cmd(dir.path()).arg("--help").assert().success().stdout(
        predicate::str::contains("list_clients")
            .and(predicate::str::contains("list_device_asset_details"))
            .and(predicate::str::contains("add_check_note"))
            .and(predicate::str::contains("export")),
    );
}

#[test]
fn unknown_service_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    nsight_cmd(dir.path())
        .arg("list_everything")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn wrong_arity_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    // list_sites requires exactly one positional argument.
    nsight_cmd(dir.path()).arg("list_sites").assert().failure().code(2);

    // list_outages requires three.
    nsight_cmd(dir.path())
        .args(["list_outages", "10"])
        .assert()
        .failure()
        .code(2);
}

// ── Credential handling ─────────────────────────────────────────────

#[test]
fn service_call_without_credentials_fails_with_auth_exit() {
    let dir = tempfile::tempdir().unwrap();
    let output = nsight_cmd(dir.path()).arg("list_clients").output().unwrap();
    assert_eq!(output.status.code(), Some(3), "expected auth exit code");
}

// ── Export ──────────────────────────────────────────────────────────

#[test]
fn cache_export_needs_no_credentials_but_needs_tables() {
    let dir = tempfile::tempdir().unwrap();
    let output = nsight_cmd(dir.path())
        .args(["export", "--cache"])
        .output()
        .unwrap();

    // No cache tables exist, so this fails -- but with the cache
    // diagnostic, not a credentials error.
    assert_eq!(output.status.code(), Some(1));
    let text = String::from_utf8_lossy(&output.stderr).to_string();
    assert!(
        text.contains("clients"),
        "expected missing-table diagnostic:\n{text}"
    );
}

#[test]
fn live_export_without_credentials_fails_with_auth_exit() {
    let dir = tempfile::tempdir().unwrap();
    let output = nsight_cmd(dir.path()).arg("export").output().unwrap();
    assert_eq!(output.status.code(), Some(3));
}
