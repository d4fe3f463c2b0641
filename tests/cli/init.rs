use crate::cli::support::qna;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_init_creates_store() {
    let dir = tempdir().unwrap();

    qna()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized qna store"));

    assert!(dir.path().join(".qna/config.toml").exists());
    assert!(dir.path().join(".qna/qna.db").exists());
}

#[test]
fn test_init_twice_fails() {
    let dir = tempdir().unwrap();

    qna().current_dir(dir.path()).arg("init").assert().success();
    qna()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_json_output() {
    let dir = tempdir().unwrap();

    let output = qna()
        .current_dir(dir.path())
        .args(["--format", "json", "init"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "ok");
    assert!(json["store"].as_str().unwrap().ends_with(".qna"));
}

#[test]
fn test_init_at_explicit_store_path() {
    let dir = tempdir().unwrap();

    qna()
        .current_dir(dir.path())
        .args(["--store", "data/questions", "init"])
        .assert()
        .success();
    assert!(dir.path().join("data/questions/config.toml").exists());

    // The same store is reachable through --store afterwards
    qna()
        .current_dir(dir.path())
        .args(["--store", "data/questions", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No questions found"));
}

#[test]
fn test_store_discovered_from_subdirectory() {
    let dir = tempdir().unwrap();
    qna().current_dir(dir.path()).arg("init").assert().success();

    let nested = dir.path().join("a/b");
    std::fs::create_dir_all(&nested).unwrap();

    qna().current_dir(&nested).arg("list").assert().success();
}

#[test]
fn test_plain_directory_is_not_a_store() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join("plain")).unwrap();

    qna()
        .current_dir(dir.path())
        .args(["--store", "plain", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid store"));
    assert!(!dir.path().join("plain/qna.db").exists());
}
