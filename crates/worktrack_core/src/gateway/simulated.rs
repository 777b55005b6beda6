//! Fixed-latency gateway that always succeeds.

use super::{AppraisalGateway, GatewayResult, ReviewGateway, TimesheetGateway};
use crate::model::submission::{ReviewDecision, SubmissionId};
use crate::model::task::{AppraisalTask, TaskId};
use crate::model::timesheet::TimeEntry;
use crate::model::user::User;
use log::debug;
use std::time::Duration;

/// Stand-in backend: sleeps `latency`, then reports success.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedGateway {
    latency: Duration,
}

impl SimulatedGateway {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Zero-latency instance for tests and scripted shells.
    pub fn instant() -> Self {
        Self::default()
    }

    fn wait(&self, operation: &'static str) {
        debug!(
            "event=gateway_call module=gateway status=simulated op={operation} latency_ms={}",
            self.latency.as_millis()
        );
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
    }
}

impl AppraisalGateway for SimulatedGateway {
    fn save_task(&self, _task: &AppraisalTask) -> GatewayResult<()> {
        self.wait("save_task");
        Ok(())
    }

    fn upload_document(&self, _task_id: TaskId, _document: &str) -> GatewayResult<()> {
        self.wait("upload_document");
        Ok(())
    }

    fn submit_appraisal(&self, _staff: &User, _tasks: &[AppraisalTask]) -> GatewayResult<()> {
        self.wait("submit_appraisal");
        Ok(())
    }
}

impl TimesheetGateway for SimulatedGateway {
    fn save_entry(&self, _entry: &TimeEntry) -> GatewayResult<()> {
        self.wait("save_entry");
        Ok(())
    }
}

impl ReviewGateway for SimulatedGateway {
    fn record_decision(
        &self,
        _submission_id: SubmissionId,
        _decision: ReviewDecision,
        _remarks: Option<&str>,
    ) -> GatewayResult<()> {
        self.wait("record_decision");
        Ok(())
    }
}
