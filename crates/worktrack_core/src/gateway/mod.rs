//! Outbound ports for operations a real deployment would send to a backend.
//!
//! # Responsibility
//! - Name every "save", "upload", "submit" and "decide" side effect.
//! - Let services stay agnostic of latency and transport.
//!
//! # Invariants
//! - Services call the port before mutating in-memory state, so a failed
//!   call leaves state unchanged.
//! - Ports never see passwords in logs; only the auth port receives them.

use crate::model::submission::{ReviewDecision, SubmissionId};
use crate::model::task::{AppraisalTask, TaskId};
use crate::model::timesheet::TimeEntry;
use crate::model::user::User;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod simulated;

pub use simulated::SimulatedGateway;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Transport-level failure reported by a port implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Remote side could not be reached.
    Unavailable(String),
    /// Remote side refused the request.
    Rejected(String),
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "service unavailable: {message}"),
            Self::Rejected(message) => write!(f, "request rejected: {message}"),
        }
    }
}

impl Error for GatewayError {}

/// Credential check against a user directory.
pub trait AuthGateway {
    /// Returns the matching user, or `None` when credentials do not match.
    fn authenticate(&self, email: &str, password: &str) -> GatewayResult<Option<User>>;
}

/// Appraisal task board side effects.
pub trait AppraisalGateway {
    fn save_task(&self, task: &AppraisalTask) -> GatewayResult<()>;
    fn upload_document(&self, task_id: TaskId, document: &str) -> GatewayResult<()>;
    fn submit_appraisal(&self, staff: &User, tasks: &[AppraisalTask]) -> GatewayResult<()>;
}

/// Timesheet side effects.
pub trait TimesheetGateway {
    fn save_entry(&self, entry: &TimeEntry) -> GatewayResult<()>;
}

/// Review queue side effects.
pub trait ReviewGateway {
    fn record_decision(
        &self,
        submission_id: SubmissionId,
        decision: ReviewDecision,
        remarks: Option<&str>,
    ) -> GatewayResult<()>;
}
