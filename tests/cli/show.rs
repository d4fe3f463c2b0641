use crate::cli::support::{create_question, init_store, qna, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_show_human() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let id = create_question(
        dir.path(),
        "How do I export data?",
        &["--answer", "Use the export menu", "--properties", "data,export"],
    );

    qna()
        .current_dir(dir.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{id}  How do I export data?")))
        .stdout(predicate::str::contains("Tags: data, export"))
        .stdout(predicate::str::contains("Answer: Use the export menu"))
        .stdout(predicate::str::contains("Company: Test Company Limited (63297)"));
}

#[test]
fn test_show_unanswered() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let id = create_question(dir.path(), "Open question", &[]);

    qna()
        .current_dir(dir.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Answer: (unanswered)"));
}

#[test]
fn test_show_json_matches_created_record() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let id = create_question(dir.path(), "Where are logs?", &["--description", "Server side"]);

    let output = qna()
        .current_dir(dir.path())
        .args(["--format", "json", "show", &id])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["id"], id.as_str());
    assert_eq!(json["_recordId"], id.as_str());
    assert_eq!(json["questionDescription"], "Server side");
    assert!(json.get("assignedTo").is_none());
}

#[test]
fn test_show_unknown_id() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    qna()
        .current_dir(dir.path())
        .args(["show", "rec-missing"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Question not found: rec-missing"));
}

#[test]
fn test_show_unknown_id_json_error() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    let output = qna()
        .current_dir(dir.path())
        .args(["--format", "json", "show", "rec-missing"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "record_not_found");
}
