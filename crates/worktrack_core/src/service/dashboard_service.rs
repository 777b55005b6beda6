//! Dashboard overview assembled from the other services.

use crate::aggregate::tasks::{status_counts, StatusCounts, TaskCounts};
use crate::gateway::{AppraisalGateway, ReviewGateway, TimesheetGateway};
use crate::model::user::{User, UserRole};
use crate::service::appraisal_service::AppraisalService;
use crate::service::review_service::ReviewService;
use crate::service::timesheet_service::{DaySummary, TimesheetService};

/// Number of timesheet days shown on the dashboard.
pub const RECENT_DAYS: usize = 3;

/// Read-only snapshot rendered by the dashboard page.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOverview {
    pub welcome_name: String,
    pub role: UserRole,
    pub progress: u8,
    pub task_counts: TaskCounts,
    pub status_counts: StatusCounts,
    pub recent_days: Vec<DaySummary>,
    /// Only populated for admin sessions.
    pub pending_reviews: Option<usize>,
}

pub fn dashboard_overview<A, T, R>(
    user: &User,
    appraisal: &AppraisalService<A>,
    timesheet: &TimesheetService<T>,
    review: &ReviewService<R>,
) -> DashboardOverview
where
    A: AppraisalGateway,
    T: TimesheetGateway,
    R: ReviewGateway,
{
    let pending_reviews = if user.is_admin() {
        review.pending_count(user).ok()
    } else {
        None
    };

    DashboardOverview {
        welcome_name: user.name.clone(),
        role: user.role,
        progress: appraisal.progress(),
        task_counts: appraisal.counts(),
        status_counts: status_counts(appraisal.tasks()),
        recent_days: timesheet.history(RECENT_DAYS),
        pending_reviews,
    }
}
