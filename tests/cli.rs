use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cmd(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("program_diagnostic").expect("binary built");
    cmd.current_dir(workdir);
    cmd
}

#[test]
fn reports_mismatches_and_logs() {
    let tmp = TempDir::new().expect("create temp dir");
    let ws = tmp.path().join("ws");
    fs::create_dir_all(ws.join("solana-program/src")).unwrap();
    fs::write(ws.join("solana-program/src/lib.rs"), "fn f() -> ProgramResult {\n").unwrap();
    fs::write(ws.join("Cargo.toml"), "[dependencies]\nsolana-sdk = \"1.18.0\"\n").unwrap();

    cmd(tmp.path())
        .arg("--root")
        .arg(&ws)
        .arg("--quiet")
        .assert()
        .success();

    let report = fs::read_to_string(tmp.path().join("solana_program_diagnostic_report.txt"))
        .expect("report in working directory");
    assert!(report.starts_with("Solana Program Diagnostic Summary\n"));
    assert!(report.contains("  - ProgramResult used, may be incompatible with solana-program v2.1.0\n"));
    assert!(report.contains("  - Unbalanced braces\n"));
    assert!(report.contains(": version 1.18.0, expected 1.25.0\n"));

    let log = fs::read_to_string(tmp.path().join("solana_program_diagnostic.log")).unwrap();
    assert!(log.contains(" - INFO - Starting diagnostic scan..."));
    assert!(log.contains(" - INFO - Diagnostic report generated at "));
}

#[test]
fn missing_root_logs_error_without_report() {
    let tmp = TempDir::new().expect("create temp dir");
    let report = tmp.path().join("report.txt");

    cmd(tmp.path())
        .arg("--root")
        .arg(tmp.path().join("absent"))
        .arg("--report")
        .arg(&report)
        .assert()
        .success();

    assert!(!report.exists());
    let log = fs::read_to_string(tmp.path().join("solana_program_diagnostic.log")).unwrap();
    assert!(log.contains(" - ERROR - Directory "));
    assert!(log.contains("does not exist"));
}

#[test]
fn config_file_overrides_expectations() {
    let tmp = TempDir::new().expect("create temp dir");
    let ws = tmp.path().join("ws");
    fs::create_dir_all(&ws).unwrap();
    fs::write(ws.join("Cargo.toml"), "[dependencies]\nsolana-sdk = \"1.18.0\"\n").unwrap();

    let config = tmp.path().join("config.json");
    fs::write(
        &config,
        r#"{"expectations": [{"name": "solana-sdk", "version": "1.18.0", "path": "./solana-sdk"}]}"#,
    )
    .unwrap();

    cmd(tmp.path())
        .arg("--config")
        .arg(&config)
        .arg("--root")
        .arg(&ws)
        .arg("--log-file")
        .arg(tmp.path().join("run.log"))
        .assert()
        .success();

    let report = fs::read_to_string(tmp.path().join("solana_program_diagnostic_report.txt")).unwrap();
    assert!(report.ends_with("No issues found. 🎉\n"));

    let log = fs::read_to_string(tmp.path().join("run.log")).unwrap();
    assert!(log.contains(" - INFO - No issues found. 🎉\n"));
    assert!(log.contains(" - INFO - Diagnostic report generated at "));
    assert!(!tmp.path().join("solana_program_diagnostic.log").exists());
}

#[test]
fn invalid_config_fails() {
    let tmp = TempDir::new().expect("create temp dir");
    let config = tmp.path().join("config.json");
    fs::write(&config, "{ not json").unwrap();

    cmd(tmp.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .failure();

    assert!(!tmp.path().join("solana_program_diagnostic_report.txt").exists());
}
