use crate::cli::support::{create_question, init_store, qna};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_delete_removes_question() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let id = create_question(dir.path(), "Temporary question", &[]);

    qna()
        .current_dir(dir.path())
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Question deleted successfully"));

    qna()
        .current_dir(dir.path())
        .args(["show", &id])
        .assert()
        .code(3);

    qna()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No questions found"));
}

#[test]
fn test_delete_json_output() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let id = create_question(dir.path(), "Temporary question", &[]);

    let output = qna()
        .current_dir(dir.path())
        .args(["--format", "json", "delete", &id])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["message"], "Question deleted successfully");
    assert_eq!(json["id"], id.as_str());
}

#[test]
fn test_delete_unknown_id() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    qna()
        .current_dir(dir.path())
        .args(["delete", "rec-missing"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Question not found"));
}

#[test]
fn test_delete_leaves_other_questions() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let gone = create_question(dir.path(), "First question", &[]);
    let kept = create_question(dir.path(), "Second question", &[]);

    qna()
        .current_dir(dir.path())
        .args(["delete", &gone])
        .assert()
        .success();

    qna()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(kept))
        .stdout(predicate::str::contains("First question").not());
}
