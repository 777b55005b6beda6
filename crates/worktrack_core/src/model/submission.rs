//! Appraisal submission model (admin review side).
//!
//! # Invariants
//! - `status` is one of exactly three values.
//! - `Approved` and `Rejected` are terminal.
//! - A rejected submission always carries non-blank `remarks`.

use crate::model::task::{TaskCategory, TaskStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type SubmissionId = Uuid;

/// Review state of a submitted appraisal package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 3] = [
        SubmissionStatus::Pending,
        SubmissionStatus::Approved,
        SubmissionStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value.trim())
    }
}

/// Reviewer verdict on a pending submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    /// Status a pending submission moves to.
    pub fn outcome(self) -> SubmissionStatus {
        match self {
            Self::Approve => SubmissionStatus::Approved,
            Self::Reject => SubmissionStatus::Rejected,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

/// Frozen copy of one task as it was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    pub title: String,
    pub category: TaskCategory,
    pub description: String,
    pub status: TaskStatus,
    pub documents: Vec<String>,
}

/// A staff member's complete appraisal package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppraisalSubmission {
    pub id: SubmissionId,
    pub staff_name: String,
    pub department: String,
    /// Academic designation, e.g. "Assistant Professor".
    pub designation: String,
    pub submitted_on: NaiveDate,
    pub status: SubmissionStatus,
    pub tasks: Vec<TaskSnapshot>,
    /// Reviewer feedback recorded with the decision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl AppraisalSubmission {
    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    /// Number of attached documents across all task snapshots.
    pub fn document_count(&self) -> usize {
        self.tasks.iter().map(|task| task.documents.len()).sum()
    }
}
