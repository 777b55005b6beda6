//! Review queue use-cases for admin, principal and department heads.
//!
//! # Responsibility
//! - List and select submissions the viewer may review.
//! - Move pending submissions to approved or rejected.
//!
//! # Invariants
//! - Only `pending` submissions can be decided; decisions are terminal.
//! - Rejection requires non-blank remarks.
//! - The decision is recorded through the gateway before the state change.
//! - Remarks are never written to logs.
//!
//! # See also
//! - `policy::access::can_review_submission` for reviewer scope.

use crate::aggregate::submissions::{filter_submissions, SubmissionFilter};
use crate::gateway::{GatewayError, ReviewGateway};
use crate::model::submission::{
    AppraisalSubmission, ReviewDecision, SubmissionId, SubmissionStatus,
};
use crate::model::user::{User, UserRole};
use crate::policy::access::{can_review, can_review_submission};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from review queue operations.
#[derive(Debug)]
pub enum ReviewError {
    /// Viewer role may not review.
    Forbidden { role: UserRole },
    /// Unknown id, or outside the viewer's scope.
    SubmissionNotFound(SubmissionId),
    RemarksRequired,
    AlreadyDecided {
        id: SubmissionId,
        status: SubmissionStatus,
    },
    Gateway(GatewayError),
}

impl Display for ReviewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forbidden { role } => write!(f, "role `{role}` cannot review submissions"),
            Self::SubmissionNotFound(id) => write!(f, "submission not found: {id}"),
            Self::RemarksRequired => write!(f, "Please provide remarks for rejection"),
            Self::AlreadyDecided { id, status } => {
                write!(f, "submission {id} is already {}", status.as_str())
            }
            Self::Gateway(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ReviewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Gateway(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GatewayError> for ReviewError {
    fn from(value: GatewayError) -> Self {
        Self::Gateway(value)
    }
}

pub struct ReviewService<G: ReviewGateway> {
    submissions: Vec<AppraisalSubmission>,
    gateway: G,
}

impl<G: ReviewGateway> ReviewService<G> {
    pub fn new(gateway: G, submissions: Vec<AppraisalSubmission>) -> Self {
        Self {
            submissions,
            gateway,
        }
    }

    /// Submissions in the viewer's scope matching `filter`, in queue order.
    pub fn list(
        &self,
        viewer: &User,
        filter: &SubmissionFilter,
    ) -> Result<Vec<&AppraisalSubmission>, ReviewError> {
        ensure_reviewer(viewer)?;
        let scoped = self
            .submissions
            .iter()
            .filter(|submission| can_review_submission(viewer, submission));
        Ok(filter_submissions(scoped, filter))
    }

    /// Current record of one submission.
    pub fn select(
        &self,
        viewer: &User,
        id: SubmissionId,
    ) -> Result<&AppraisalSubmission, ReviewError> {
        let index = self.position(viewer, id)?;
        Ok(&self.submissions[index])
    }

    /// Number of pending submissions in the viewer's scope.
    pub fn pending_count(&self, viewer: &User) -> Result<usize, ReviewError> {
        Ok(self
            .list(viewer, &SubmissionFilter::Status(SubmissionStatus::Pending))?
            .len())
    }

    /// Approves a pending submission. Blank remarks are stored as `None`.
    pub fn approve(
        &mut self,
        viewer: &User,
        id: SubmissionId,
        remarks: Option<&str>,
    ) -> Result<&AppraisalSubmission, ReviewError> {
        let remarks = remarks.map(str::trim).filter(|value| !value.is_empty());
        self.decide(viewer, id, ReviewDecision::Approve, remarks)
    }

    /// Rejects a pending submission.
    ///
    /// # Errors
    /// - `RemarksRequired` when `remarks` is blank; nothing changes.
    pub fn reject(
        &mut self,
        viewer: &User,
        id: SubmissionId,
        remarks: &str,
    ) -> Result<&AppraisalSubmission, ReviewError> {
        let remarks = remarks.trim();
        if remarks.is_empty() {
            warn!(
                "event=review_decide module=review status=error error_code=remarks_required submission_id={id}"
            );
            return Err(ReviewError::RemarksRequired);
        }
        self.decide(viewer, id, ReviewDecision::Reject, Some(remarks))
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn decide(
        &mut self,
        viewer: &User,
        id: SubmissionId,
        decision: ReviewDecision,
        remarks: Option<&str>,
    ) -> Result<&AppraisalSubmission, ReviewError> {
        let index = self.position(viewer, id)?;
        let status = self.submissions[index].status;
        if status.is_terminal() {
            warn!(
                "event=review_decide module=review status=error error_code=already_decided submission_id={id} current={}",
                status.as_str()
            );
            return Err(ReviewError::AlreadyDecided { id, status });
        }

        if let Err(err) = self.gateway.record_decision(id, decision, remarks) {
            warn!(
                "event=review_decide module=review status=error error_code=gateway submission_id={id} error={err}"
            );
            return Err(err.into());
        }

        let submission = &mut self.submissions[index];
        submission.status = decision.outcome();
        submission.remarks = remarks.map(str::to_string);
        info!(
            "event=review_decide module=review status=ok submission_id={id} decision={} reviewer_role={}",
            decision.as_str(),
            viewer.role
        );
        Ok(&*submission)
    }

    fn position(&self, viewer: &User, id: SubmissionId) -> Result<usize, ReviewError> {
        ensure_reviewer(viewer)?;
        self.submissions
            .iter()
            .position(|submission| {
                submission.id == id && can_review_submission(viewer, submission)
            })
            .ok_or(ReviewError::SubmissionNotFound(id))
    }
}

fn ensure_reviewer(viewer: &User) -> Result<(), ReviewError> {
    if can_review(viewer) {
        Ok(())
    } else {
        Err(ReviewError::Forbidden { role: viewer.role })
    }
}
