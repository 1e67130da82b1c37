use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Homework posted by a teacher for a class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub class_name: String,
    pub subject: String,
    pub due_date: NaiveDate,
    pub posted_by: String,
}

impl Assignment {
    /// True once `today` is past the due date.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        today > self.due_date
    }
}

/// Request DTO for posting an assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct NewAssignment {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Title is required"))
    )]
    pub title: String,
    pub description: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Class is required"))
    )]
    pub class_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Subject is required"))
    )]
    pub subject: String,
    pub due_date: NaiveDate,
}

/// A student's answer to an assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct AssignmentSubmission {
    pub admission_no: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Submission cannot be empty"))
    )]
    pub content: String,
}
