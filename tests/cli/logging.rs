use crate::cli::support::{init_store, qna};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    qna()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("QNA_LOG")
        .args(["--log-level", "debug", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("tag_filter"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    qna()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("QNA_LOG")
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_enables_phase_timings() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    qna()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("QNA_LOG")
        .args(["--verbose", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("discover_store"))
        .stderr(predicate::str::contains("execute_command"));
}

#[test]
fn test_log_json_emits_structured_lines() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    qna()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("QNA_LOG")
        .args(["--log-level", "debug", "--log-json", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));
}

#[test]
fn test_qna_log_env_overrides_cli_level() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    qna()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env("QNA_LOG", "qna=debug")
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    let output = qna()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("QNA_LOG")
        .args(["--log-level", "debug", "--format", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json.as_array().unwrap().is_empty());
}
