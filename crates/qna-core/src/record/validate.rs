//! Field validation for new records

use regex::Regex;
use tracing::warn;

use super::NewRecord;
use crate::error::{QnaError, Result};

/// Check whether a string looks like an email address
pub fn is_email(value: &str) -> bool {
    let email_re = match Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$") {
        Ok(re) => re,
        Err(e) => {
            warn!(error = %e, "Failed to compile email regex");
            return false;
        }
    };
    email_re.is_match(value)
}

/// Validate a record before creation, collecting every failure
pub fn validate_new_record(record: &NewRecord) -> Result<()> {
    let mut errors = Vec::new();

    if record.question.trim().is_empty() {
        errors.push("Question is required".to_string());
    }

    if !is_email(&record.created_by) {
        errors.push("Valid email is required".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(QnaError::Validation { errors })
    }
}
