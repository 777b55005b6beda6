//! Core domain logic for WorkTrack, the faculty timesheet and appraisal tracker.
//! This crate is the single source of truth for access rules and business invariants.

pub mod aggregate;
pub mod config;
pub mod context;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod policy;
pub mod repo;
pub mod seed;
pub mod service;
pub mod session;

pub use aggregate::submissions::SubmissionFilter;
pub use aggregate::tasks::{CategorySummary, StatusCounts, TaskCounts, TaskFilter};
pub use config::{ConfigError, CoreConfig};
pub use context::AppContext;
pub use gateway::{GatewayError, SimulatedGateway};
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, logging_status, LoggingError,
};
pub use model::preferences::Preferences;
pub use model::submission::{AppraisalSubmission, ReviewDecision, SubmissionId, SubmissionStatus};
pub use model::task::{AppraisalTask, TaskCategory, TaskId, TaskStatus};
pub use model::timesheet::{ActivityType, EntrySpan, Period, PeriodId, TimeEntry};
pub use model::user::{User, UserRole};
pub use policy::access::{can_view, can_view_user};
pub use policy::route::{route_access, Route, RouteAccess};
pub use repo::local_store::{LocalStore, MemoryLocalStore, SqliteLocalStore, StoreError};
pub use service::appraisal_service::{AppraisalError, NewTaskRequest};
pub use service::dashboard_service::DashboardOverview;
pub use service::review_service::ReviewError;
pub use service::timesheet_service::{
    DaySummary, NewEntryRequest, SavePeriodRequest, TimesheetError,
};
pub use session::directory::DEMO_PASSWORD;
pub use session::store::AuthError;

/// Health-check API for shell integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
