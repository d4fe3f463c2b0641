use crate::cli::support::{create_question, init_store, qna, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_create_prints_id() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    let id = create_question(dir.path(), "How do I reset my password?", &[]);
    assert!(id.starts_with("rec"), "unexpected id: {id}");
}

#[test]
fn test_create_json_stamps_company_and_self_reference() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    let output = qna()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "create",
            "What is the refund policy?",
            "--created-by",
            "asker@example.com",
            "--answer",
            "30 days",
            "--properties",
            "billing,refund",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["question"], "What is the refund policy?");
    assert_eq!(json["answer"], "30 days");
    assert_eq!(json["properties"], "billing,refund");
    assert_eq!(json["companyName"], "Test Company Limited");
    assert_eq!(json["_companyId"], 63297);
    assert_eq!(json["_recordId"], json["id"]);
    assert_eq!(json["createdBy"], "asker@example.com");
    assert_eq!(json["updatedBy"], "asker@example.com");
    assert_eq!(json["createdAt"], json["updatedAt"]);
    assert_eq!(json["createdAt"].as_str().unwrap().len(), "2024-01-01 00:00".len());
}

#[test]
fn test_create_with_assignee() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    let output = qna()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "create",
            "Who owns billing?",
            "--created-by",
            "asker@example.com",
            "--assigned-to",
            "owner@example.com",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["assignedTo"]["email"], "owner@example.com");
    assert_eq!(json["assignedTo"]["status"], "assigned");
}

#[test]
fn test_create_rejects_invalid_email() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    qna()
        .current_dir(dir.path())
        .args(["create", "Anything?", "--created-by", "not-an-email"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Valid email is required"));
}

#[test]
fn test_create_reports_all_validation_errors_as_json() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    let output = qna()
        .current_dir(dir.path())
        .args(["--format", "json", "create", "  ", "--created-by", "nope"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "validation");
    let errors = json["error"]["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert!(errors.contains(&serde_json::json!("Question is required")));
    assert!(errors.contains(&serde_json::json!("Valid email is required")));
}

#[test]
fn test_create_requires_created_by() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    qna()
        .current_dir(dir.path())
        .env_remove("QNA_USER")
        .args(["create", "Who am I?"])
        .assert()
        .code(2);
}

#[test]
fn test_create_created_by_from_env() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    let output = qna()
        .current_dir(dir.path())
        .env("QNA_USER", "env@example.com")
        .args(["--format", "json", "create", "Where is the config?"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["createdBy"], "env@example.com");
}

#[test]
fn test_create_records_format() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    qna()
        .current_dir(dir.path())
        .args([
            "--format",
            "records",
            "create",
            "Is there an \"admin\" mode?",
            "--created-by",
            "asker@example.com",
            "--properties",
            "admin",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H qna=1 records=1 mode=create questions=1"))
        .stdout(predicate::str::contains("tags=admin"))
        .stdout(predicate::str::contains(r#""Is there an \"admin\" mode?""#));
}
