//! CLI integration tests

use std::process::Command;

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "aeo-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(
        stdout.contains("AI Energy Optimizer"),
        "Should show app name"
    );
    assert!(stdout.contains("telemetry"), "Should show telemetry command");
    assert!(
        stdout.contains("suggestions"),
        "Should show suggestions command"
    );
    assert!(stdout.contains("roi"), "Should show roi command");
    assert!(stdout.contains("analyze"), "Should show analyze command");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = Command::new("cargo")
        .args(["run", "-p", "aeo-cli", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("aeo"), "Should show binary name");
}

/// Test telemetry show subcommand help
#[test]
fn test_telemetry_show_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "aeo-cli", "--", "telemetry", "show", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Telemetry show help should succeed");
    assert!(
        stdout.contains("--last-hours"),
        "Should show last-hours option"
    );
}

/// Test telemetry summary subcommand help
#[test]
fn test_telemetry_summary_help() {
    let output = Command::new("cargo")
        .args([
            "run",
            "-p",
            "aeo-cli",
            "--",
            "telemetry",
            "summary",
            "--help",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "Telemetry summary help should succeed"
    );
    assert!(stdout.contains("--hours"), "Should show hours option");
}

/// Test roi command help
#[test]
fn test_roi_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "aeo-cli", "--", "roi", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Roi help should succeed");
    assert!(stdout.contains("--servers"), "Should show servers option");
    assert!(
        stdout.contains("--monthly-cost"),
        "Should show monthly-cost option"
    );
    assert!(
        stdout.contains("--efficiency"),
        "Should show efficiency option"
    );
}

/// Test analyze command help
#[test]
fn test_analyze_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "aeo-cli", "--", "analyze", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Analyze help should succeed");
    assert!(stdout.contains("--speed"), "Should show speed option");
}

/// Test that roi requires its arguments
#[test]
fn test_roi_requires_arguments() {
    let output = Command::new("cargo")
        .args(["run", "-p", "aeo-cli", "--", "roi"])
        .output()
        .expect("Failed to execute command");

    assert!(
        !output.status.success(),
        "roi without arguments should fail"
    );
}
