//! Integration tests for the `parkdash` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! and error handling — all without requiring a live backend.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `parkdash` binary with env isolation.
///
/// Clears all `PARKDASH_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn parkdash_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("parkdash");
    cmd.env("HOME", "/tmp/parkdash-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/parkdash-cli-test-nonexistent")
        .env_remove("PARKDASH_API_URL")
        .env_remove("PARKDASH_OUTPUT")
        .env_remove("PARKDASH_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = parkdash_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    parkdash_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("parking zones")
            .and(predicate::str::contains("zones"))
            .and(predicate::str::contains("spaces"))
            .and(predicate::str::contains("dashboard")),
    );
}

#[test]
fn test_version_flag() {
    parkdash_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("parkdash"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    parkdash_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    parkdash_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = parkdash_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_invalid_output_format() {
    let output = parkdash_cmd()
        .args(["--output", "invalid", "zones", "list"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_malformed_api_url_is_rejected() {
    parkdash_cmd()
        .args(["--api-url", "not a url", "zones", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("api-url").or(predicate::str::contains("invalid URL")));
}

#[test]
fn test_zones_get_rejects_non_uuid() {
    // Fails on argument validation before any network access.
    let output = parkdash_cmd()
        .args(["--api-url", "http://127.0.0.1:1/api", "zones", "get", "banana"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("UUID") || text.contains("banana"),
        "Expected UUID validation error:\n{text}"
    );
}

#[test]
fn test_delete_without_yes_requires_confirmation() {
    // stdin is not a terminal here, so the prompt is refused before any
    // network access happens.
    let output = parkdash_cmd()
        .args([
            "--api-url",
            "http://127.0.0.1:1/api",
            "zones",
            "delete",
            "6a0f1fd6-66f3-4b2a-9e3b-3f6dbf1a2c3d",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("--yes") || text.contains("confirmation"),
        "Expected confirmation-required error:\n{text}"
    );
}

#[test]
fn test_unreachable_backend_reports_connection_error() {
    // Port 1 is virtually never listening; connect is refused immediately.
    let output = parkdash_cmd()
        .args(["--api-url", "http://127.0.0.1:1/api", "status"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(7), "Expected connection exit code");
}

// ── Config commands ─────────────────────────────────────────────────

#[test]
fn test_config_show_without_file_uses_defaults() {
    parkdash_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_url").and(predicate::str::contains("8090")));
}

#[test]
fn test_config_path_prints_a_path() {
    parkdash_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_zones_subcommands_exist() {
    parkdash_cmd()
        .args(["zones", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("update"))
                .and(predicate::str::contains("delete")),
        );
}

#[test]
fn test_spaces_subcommands_exist() {
    parkdash_cmd()
        .args(["spaces", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("delete")),
        );
}

#[test]
fn test_spaces_list_filter_flags_parse() {
    // Filter flags should parse; the failure must be about the backend,
    // not about argument parsing.
    let output = parkdash_cmd()
        .args([
            "--api-url",
            "http://127.0.0.1:1/api",
            "spaces",
            "list",
            "--status",
            "occupied",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        !text.contains("unexpected argument"),
        "Flags failed to parse:\n{text}"
    );
}

#[test]
fn test_global_flags_parsing() {
    let output = parkdash_cmd()
        .args([
            "--output",
            "json",
            "--verbose",
            "--timeout",
            "5",
            "--api-url",
            "http://127.0.0.1:1/api",
            "zones",
            "list",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        !text.contains("unexpected argument"),
        "Flags failed to parse:\n{text}"
    );
}
