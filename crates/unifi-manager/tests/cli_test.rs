//! Integration tests for the `unifi-manager` binary.
//!
//! These validate argument parsing, help output, shell completions,
//! template generation, and fail-fast error handling — all without a
//! live controller.
#![allow(clippy::unwrap_used)]

use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `unifi-manager` binary with env isolation.
fn unifi_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("unifi-manager").unwrap();
    cmd.env_remove("UNIFI_CONTROLLER")
        .env_remove("UNIFI_USERNAME")
        .env_remove("UNIFI_PASSWORD")
        .env_remove("UNIFI_SITE")
        .env_remove("UNIFI_VERIFY_TLS");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = unifi_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    unifi_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("UniFi")
            .and(predicate::str::contains("list-clients"))
            .and(predicate::str::contains("export-csv"))
            .and(predicate::str::contains("import-csv"))
            .and(predicate::str::contains("set-static-ip"))
            .and(predicate::str::contains("clear-arp"))
            .and(predicate::str::contains("generate-template")),
    );
}

#[test]
fn test_version_flag() {
    unifi_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("unifi-manager"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    unifi_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    unifi_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Template generation (no controller needed) ──────────────────────

#[test]
fn test_generate_template_writes_example_row() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("template.csv");

    unifi_cmd()
        .args(["generate-template", "--file"])
        .arg(&file)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&file).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next().unwrap(), "MAC,Hostname,Static_IP,Use_Static,Notes");
    let row = lines.next().unwrap();
    assert!(row.starts_with("aa:bb:cc:dd:ee:ff,example-device,192.168.1.100,true"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = unifi_cmd().arg("foobar").output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized") || text.contains("invalid") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_set_static_ip_requires_mac_and_ip() {
    let output = unifi_cmd().arg("set-static-ip").output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("--mac") || text.contains("required"), "{text}");
}

#[test]
fn test_import_csv_requires_file() {
    let output = unifi_cmd().arg("import-csv").output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
}

#[test]
fn test_invalid_controller_url_fails_before_network() {
    unifi_cmd()
        .args([
            "--controller",
            "not a url",
            "--password",
            "x",
            "list-clients",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid URL"));
}

#[test]
fn test_unreachable_controller_fails_login() {
    let output = unifi_cmd()
        .args([
            "--controller",
            "https://127.0.0.1:9",
            "--password",
            "x",
            "list-clients",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success(), "Expected connection failure");
}

#[test]
fn test_global_flags_parsing() {
    // All flags should parse; the failure must come from the connection
    // attempt, not from argument parsing.
    let output = unifi_cmd()
        .args([
            "--output",
            "json",
            "--site",
            "default",
            "--verify-tls",
            "--verbose",
            "--controller",
            "https://127.0.0.1:9",
            "--password",
            "x",
            "list-clients",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        !text.contains("unexpected argument"),
        "flags should parse cleanly:\n{text}"
    );
}
