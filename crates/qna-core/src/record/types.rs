use serde::{Deserialize, Serialize};

/// strftime pattern for `created_at` / `updated_at`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Status reported for any record with an assignee
pub const ASSIGNED_STATUS: &str = "assigned";

/// A stored question/answer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Store-assigned identifier
    pub id: String,
    /// Self-reference written after creation; equals `id` once set
    pub record_id: Option<String>,
    pub question: String,
    #[serde(default)]
    pub question_description: String,
    #[serde(default)]
    pub answer: String,
    /// Comma-delimited tag string
    #[serde(default)]
    pub properties: String,
    pub created_by: String,
    pub updated_by: String,
    #[serde(default)]
    pub assigned_to: String,
    pub company_name: String,
    pub company_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Assignee view of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment<'a> {
    pub email: &'a str,
    pub status: &'static str,
}

impl Record {
    /// Tags parsed from `properties`, verbatim and in stored order.
    ///
    /// An empty `properties` field yields no tags at all.
    pub fn tags(&self) -> Vec<&str> {
        if self.properties.is_empty() {
            Vec::new()
        } else {
            self.properties.split(',').collect()
        }
    }

    /// Assignee, if one is set
    pub fn assignment(&self) -> Option<Assignment<'_>> {
        if self.assigned_to.is_empty() {
            None
        } else {
            Some(Assignment {
                email: &self.assigned_to,
                status: ASSIGNED_STATUS,
            })
        }
    }

    /// JSON view of the record, using the public field names
    pub fn to_json(&self) -> serde_json::Value {
        let mut json = serde_json::json!({
            "id": self.id,
            "_recordId": self.record_id,
            "companyName": self.company_name,
            "questionDescription": self.question_description,
            "question": self.question,
            "answer": self.answer,
            "_companyId": self.company_id,
            "properties": self.properties,
            "createdAt": self.created_at,
            "updatedAt": self.updated_at,
            "updatedBy": self.updated_by,
            "createdBy": self.created_by,
        });

        if let (Some(assignment), Some(obj)) = (self.assignment(), json.as_object_mut()) {
            obj.insert(
                "assignedTo".to_string(),
                serde_json::json!({
                    "email": assignment.email,
                    "status": assignment.status,
                }),
            );
        }

        json
    }
}

/// Fields supplied when creating a record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRecord {
    pub question: String,
    pub question_description: Option<String>,
    pub created_by: String,
    pub properties: Option<String>,
    pub answer: Option<String>,
    pub updated_by: Option<String>,
    pub assigned_to: Option<String>,
}

impl NewRecord {
    pub fn new(question: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            created_by: created_by.into(),
            ..Self::default()
        }
    }

    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    pub fn with_properties(mut self, properties: impl Into<String>) -> Self {
        self.properties = Some(properties.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.question_description = Some(description.into());
        self
    }

    pub fn with_assignee(mut self, assigned_to: impl Into<String>) -> Self {
        self.assigned_to = Some(assigned_to.into());
        self
    }

    pub fn with_updated_by(mut self, updated_by: impl Into<String>) -> Self {
        self.updated_by = Some(updated_by.into());
        self
    }
}

/// Partial update of a record. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub question: Option<String>,
    pub question_description: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub answer: Option<String>,
    pub assigned_to: Option<String>,
    pub properties: Option<String>,
}

impl RecordPatch {
    /// Apply the patch to a record in place.
    ///
    /// An empty `question` is ignored. `updated_by` falls back to a supplied
    /// `created_by`. Timestamps and company stamping are the store's job.
    pub fn apply(&self, record: &mut Record) {
        if let Some(question) = self.question.as_ref().filter(|q| !q.is_empty()) {
            record.question = question.clone();
        }
        if let Some(description) = &self.question_description {
            record.question_description = description.clone();
        }
        if let Some(created_by) = self.created_by.as_ref().filter(|c| !c.is_empty()) {
            record.created_by = created_by.clone();
        }
        match (
            self.updated_by.as_ref().filter(|u| !u.is_empty()),
            self.created_by.as_ref().filter(|c| !c.is_empty()),
        ) {
            (Some(updated_by), _) => record.updated_by = updated_by.clone(),
            (None, Some(created_by)) => record.updated_by = created_by.clone(),
            (None, None) => {}
        }
        if let Some(answer) = &self.answer {
            record.answer = answer.clone();
        }
        if let Some(assigned_to) = &self.assigned_to {
            record.assigned_to = assigned_to.clone();
        }
        if let Some(properties) = &self.properties {
            record.properties = properties.clone();
        }
    }

    /// True when the patch would not change any caller-supplied field
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
