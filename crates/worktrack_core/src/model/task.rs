//! Appraisal task model.
//!
//! # Responsibility
//! - Define the unit of faculty work claimed for performance scoring.
//! - Derive task status from completion flag and attached documents.
//!
//! # Invariants
//! - `status` always equals `TaskStatus::derive(completed, documents)`.
//! - `score <= total_marks` for validated tasks.
//! - `documents` keeps attachment order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type TaskId = Uuid;

/// Appraisal category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Teaching,
    Research,
    Professional,
    Service,
    Extension,
}

impl TaskCategory {
    /// Canonical order used for summary tiles.
    pub const ALL: [TaskCategory; 5] = [
        TaskCategory::Teaching,
        TaskCategory::Research,
        TaskCategory::Professional,
        TaskCategory::Service,
        TaskCategory::Extension,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Teaching => "teaching",
            Self::Research => "research",
            Self::Professional => "professional",
            Self::Service => "service",
            Self::Extension => "extension",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Teaching => "Teaching & Learning",
            Self::Research => "Research & Publications",
            Self::Professional => "Professional Development",
            Self::Service => "Institutional Service",
            Self::Extension => "Extension Activities",
        }
    }

    /// Parses an exact category tag.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value.trim())
    }
}

/// Derived progress state shown on task cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Completed wins; otherwise any evidence means work is in progress.
    pub fn derive(completed: bool, documents: &[String]) -> Self {
        if completed {
            Self::Completed
        } else if documents.is_empty() {
            Self::NotStarted
        } else {
            Self::InProgress
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// Validation failures for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    NilId,
    BlankTitle,
    BlankDescription,
    ScoreExceedsTotal { score: u32, total_marks: u32 },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be nil"),
            Self::BlankTitle => write!(f, "task title must not be blank"),
            Self::BlankDescription => write!(f, "task description must not be blank"),
            Self::ScoreExceedsTotal { score, total_marks } => write!(
                f,
                "task score ({score}) must be <= total marks ({total_marks})"
            ),
        }
    }
}

impl Error for TaskValidationError {}

/// One claimed unit of appraisal work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppraisalTask {
    pub id: TaskId,
    pub title: String,
    pub category: TaskCategory,
    pub description: String,
    /// Compliance requirement text; may be empty.
    #[serde(default)]
    pub compliance: String,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub total_marks: u32,
    pub completed: bool,
    pub documents: Vec<String>,
    pub deadline: NaiveDate,
    pub status: TaskStatus,
}

impl AppraisalTask {
    /// Creates an incomplete task with no documents and a generated ID.
    pub fn new(
        title: impl Into<String>,
        category: TaskCategory,
        description: impl Into<String>,
        deadline: NaiveDate,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, category, description, deadline)
    }

    /// Same as [`AppraisalTask::new`] with a caller-provided ID (seed data).
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        category: TaskCategory,
        description: impl Into<String>,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category,
            description: description.into(),
            compliance: String::new(),
            score: 0,
            total_marks: 0,
            completed: false,
            documents: Vec::new(),
            deadline,
            status: TaskStatus::NotStarted,
        }
    }

    /// Sets the completion flag and re-derives status.
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
        self.refresh_status();
    }

    /// Appends one document name and re-derives status.
    pub fn attach_document(&mut self, name: impl Into<String>) {
        self.documents.push(name.into());
        self.refresh_status();
    }

    pub fn refresh_status(&mut self) {
        self.status = TaskStatus::derive(self.completed, &self.documents);
    }

    pub fn is_pending(&self) -> bool {
        !self.completed
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::BlankTitle);
        }
        if self.description.trim().is_empty() {
            return Err(TaskValidationError::BlankDescription);
        }
        if self.score > self.total_marks {
            return Err(TaskValidationError::ScoreExceedsTotal {
                score: self.score,
                total_marks: self.total_marks,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppraisalTask, TaskCategory, TaskStatus, TaskValidationError};
    use chrono::NaiveDate;

    fn deadline() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 30).expect("valid date")
    }

    #[test]
    fn status_follows_completion_then_documents() {
        let mut task =
            AppraisalTask::new("NPTEL", TaskCategory::Professional, "course", deadline());
        assert_eq!(task.status, TaskStatus::NotStarted);

        task.attach_document("certificate.pdf");
        assert_eq!(task.status, TaskStatus::InProgress);

        task.set_completed(true);
        assert_eq!(task.status, TaskStatus::Completed);

        task.set_completed(false);
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[test]
    fn validate_rejects_score_above_total() {
        let mut task = AppraisalTask::new("Paper", TaskCategory::Research, "publish", deadline());
        task.score = 12;
        task.total_marks = 10;
        assert_eq!(
            task.validate().expect_err("score above total"),
            TaskValidationError::ScoreExceedsTotal {
                score: 12,
                total_marks: 10
            }
        );
    }

    #[test]
    fn category_parse_is_exact() {
        assert_eq!(TaskCategory::parse("service"), Some(TaskCategory::Service));
        assert_eq!(TaskCategory::parse("Service"), None);
    }
}
