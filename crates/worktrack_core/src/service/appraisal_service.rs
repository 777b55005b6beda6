//! Appraisal task board use-cases.
//!
//! # Responsibility
//! - Own the semester task list and its mutations.
//! - Route every list view through the shared aggregator.
//! - Gate final submission on full completion.
//!
//! # Invariants
//! - New tasks are appended; list order is insertion order.
//! - The gateway is called before state changes; on failure nothing changes.

use crate::aggregate::tasks::{
    category_summaries, count_tasks, filter_tasks, progress_percent, CategorySummary, TaskCounts,
    TaskFilter,
};
use crate::gateway::{AppraisalGateway, GatewayError};
use crate::model::task::{AppraisalTask, TaskCategory, TaskId, TaskValidationError};
use crate::model::user::User;
use chrono::{NaiveDate, Utc};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from task board operations.
#[derive(Debug)]
pub enum AppraisalError {
    Validation(TaskValidationError),
    TaskNotFound(TaskId),
    /// Submission requires every task to be completed.
    Incomplete { progress: u8 },
    Gateway(GatewayError),
}

impl Display for AppraisalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::TaskNotFound(id) => write!(f, "appraisal task not found: {id}"),
            Self::Incomplete { progress } => write!(
                f,
                "appraisal can only be submitted at 100% completion (currently {progress}%)"
            ),
            Self::Gateway(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AppraisalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Gateway(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TaskValidationError> for AppraisalError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<GatewayError> for AppraisalError {
    fn from(value: GatewayError) -> Self {
        Self::Gateway(value)
    }
}

/// Input of the "add task" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskRequest {
    pub title: String,
    pub category: TaskCategory,
    pub description: String,
    pub deadline: NaiveDate,
    pub compliance: String,
    pub score: u32,
    pub total_marks: u32,
}

impl NewTaskRequest {
    /// Request with empty compliance text and no marks.
    pub fn new(
        title: impl Into<String>,
        category: TaskCategory,
        description: impl Into<String>,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            category,
            description: description.into(),
            deadline,
            compliance: String::new(),
            score: 0,
            total_marks: 0,
        }
    }
}

/// Task board for one signed-in staff member.
pub struct AppraisalService<G: AppraisalGateway> {
    tasks: Vec<AppraisalTask>,
    gateway: G,
}

impl<G: AppraisalGateway> AppraisalService<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_tasks(gateway, Vec::new())
    }

    pub fn with_tasks(gateway: G, tasks: Vec<AppraisalTask>) -> Self {
        Self { tasks, gateway }
    }

    pub fn tasks(&self) -> &[AppraisalTask] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&AppraisalTask> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn list(&self, filter: &TaskFilter) -> Vec<&AppraisalTask> {
        filter_tasks(&self.tasks, filter)
    }

    pub fn counts(&self) -> TaskCounts {
        count_tasks(&self.tasks)
    }

    pub fn summaries(&self) -> Vec<CategorySummary> {
        category_summaries(&self.tasks)
    }

    pub fn progress(&self) -> u8 {
        progress_percent(&self.tasks)
    }

    /// Validates, saves and appends a new task.
    pub fn add_task(&mut self, request: NewTaskRequest) -> Result<&AppraisalTask, AppraisalError> {
        let mut task = AppraisalTask::new(
            request.title.trim(),
            request.category,
            request.description.trim(),
            request.deadline,
        );
        task.compliance = request.compliance.trim().to_string();
        task.score = request.score;
        task.total_marks = request.total_marks;

        if let Err(err) = task.validate() {
            warn!("event=task_add module=appraisal status=error error={err}");
            return Err(err.into());
        }
        self.gateway.save_task(&task)?;

        info!(
            "event=task_add module=appraisal status=ok task_id={} category={}",
            task.id,
            task.category.as_str()
        );
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Toggles the completion flag and re-derives status.
    pub fn set_completed(
        &mut self,
        id: TaskId,
        completed: bool,
    ) -> Result<&AppraisalTask, AppraisalError> {
        let task = self.find_mut(id)?;
        task.set_completed(completed);
        info!(
            "event=task_completion module=appraisal status=ok task_id={id} completed={completed}"
        );
        Ok(&*task)
    }

    /// Uploads and attaches one document.
    ///
    /// When `document` is `None` a `file_<epoch_ms>.pdf` name is generated.
    pub fn attach_document(
        &mut self,
        id: TaskId,
        document: Option<String>,
    ) -> Result<&AppraisalTask, AppraisalError> {
        let name = document
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(generated_document_name);

        let index = self.position(id)?;
        self.gateway.upload_document(id, &name)?;

        let task = &mut self.tasks[index];
        task.attach_document(name);
        info!(
            "event=document_upload module=appraisal status=ok task_id={id} documents={}",
            task.documents.len()
        );
        Ok(&*task)
    }

    /// Submits the whole board for review.
    ///
    /// # Errors
    /// - `Incomplete` unless progress is 100%. An empty board is 0%.
    pub fn submit_for_review(&self, staff: &User) -> Result<(), AppraisalError> {
        let counts = self.counts();
        if counts.total == 0 || counts.pending > 0 {
            let progress = self.progress().min(99);
            warn!(
                "event=appraisal_submit module=appraisal status=error error_code=incomplete progress={progress}"
            );
            return Err(AppraisalError::Incomplete { progress });
        }

        self.gateway.submit_appraisal(staff, &self.tasks)?;
        info!(
            "event=appraisal_submit module=appraisal status=ok user_id={} tasks={}",
            staff.id,
            self.tasks.len()
        );
        Ok(())
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn position(&self, id: TaskId) -> Result<usize, AppraisalError> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(AppraisalError::TaskNotFound(id))
    }

    fn find_mut(&mut self, id: TaskId) -> Result<&mut AppraisalTask, AppraisalError> {
        let index = self.position(id)?;
        Ok(&mut self.tasks[index])
    }
}

fn generated_document_name() -> String {
    format!("file_{}.pdf", Utc::now().timestamp_millis())
}
