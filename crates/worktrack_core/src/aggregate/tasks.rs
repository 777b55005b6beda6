//! Task filtering and category counts.
//!
//! # Invariants
//! - Filtered output preserves source order.
//! - `completed + pending == total` for every count.
//! - Empty input yields zero counts and empty subsets.

use crate::aggregate::AggregateError;
use crate::model::task::{AppraisalTask, TaskCategory, TaskStatus};
use std::str::FromStr;

/// Selection key for task lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Completed,
    Pending,
    Category(TaskCategory),
}

impl TaskFilter {
    pub fn matches(&self, task: &AppraisalTask) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Pending => task.is_pending(),
            Self::Category(category) => task.category == *category,
        }
    }
}

impl FromStr for TaskFilter {
    type Err = AggregateError;

    /// Accepts `all` (or the shell tab key `all-tasks`), `completed`,
    /// `pending`, or an exact category tag.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "all" | "all-tasks" => Ok(Self::All),
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            other => TaskCategory::parse(other)
                .map(Self::Category)
                .ok_or_else(|| AggregateError::UnknownTaskFilter(other.to_string())),
        }
    }
}

/// Completion counts for one group of tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Summary tile for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: TaskCategory,
    pub counts: TaskCounts,
}

/// Per-status counts used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// Returns the tasks matching `filter`, in source order.
pub fn filter_tasks<'a>(tasks: &'a [AppraisalTask], filter: &TaskFilter) -> Vec<&'a AppraisalTask> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

/// Counts total/completed/pending over `tasks`.
pub fn count_tasks<'a>(tasks: impl IntoIterator<Item = &'a AppraisalTask>) -> TaskCounts {
    tasks
        .into_iter()
        .fold(TaskCounts::default(), |mut counts, task| {
            counts.total += 1;
            if task.completed {
                counts.completed += 1;
            } else {
                counts.pending += 1;
            }
            counts
        })
}

/// Counts for one category.
pub fn category_summary(tasks: &[AppraisalTask], category: TaskCategory) -> CategorySummary {
    let counts = count_tasks(filter_tasks(tasks, &TaskFilter::Category(category)));
    CategorySummary { category, counts }
}

/// One summary per known category, in canonical category order.
pub fn category_summaries(tasks: &[AppraisalTask]) -> Vec<CategorySummary> {
    TaskCategory::ALL
        .into_iter()
        .map(|category| category_summary(tasks, category))
        .collect()
}

/// Rounded completion percentage; `0` for an empty list.
pub fn progress_percent(tasks: &[AppraisalTask]) -> u8 {
    let counts = count_tasks(tasks);
    if counts.total == 0 {
        return 0;
    }
    let percent = (counts.completed as f64 / counts.total as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

/// Counts tasks per derived status.
pub fn status_counts(tasks: &[AppraisalTask]) -> StatusCounts {
    tasks
        .iter()
        .fold(StatusCounts::default(), |mut counts, task| {
            match task.status {
                TaskStatus::NotStarted => counts.not_started += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Completed => counts.completed += 1,
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::{count_tasks, filter_tasks, progress_percent, TaskFilter};
    use crate::aggregate::AggregateError;
    use crate::model::task::{AppraisalTask, TaskCategory};
    use chrono::NaiveDate;

    fn task(title: &str, category: TaskCategory, completed: bool) -> AppraisalTask {
        let deadline = NaiveDate::from_ymd_opt(2023, 5, 1).expect("valid date");
        let mut task = AppraisalTask::new(title, category, "details", deadline);
        task.set_completed(completed);
        task
    }

    #[test]
    fn parses_tab_keys_and_categories() {
        assert_eq!("all-tasks".parse::<TaskFilter>(), Ok(TaskFilter::All));
        assert_eq!("pending".parse::<TaskFilter>(), Ok(TaskFilter::Pending));
        assert_eq!(
            "research".parse::<TaskFilter>(),
            Ok(TaskFilter::Category(TaskCategory::Research))
        );
        assert_eq!(
            "archived".parse::<TaskFilter>(),
            Err(AggregateError::UnknownTaskFilter("archived".to_string()))
        );
    }

    #[test]
    fn empty_input_yields_zero_counts() {
        let empty: Vec<AppraisalTask> = Vec::new();
        let counts = count_tasks(&empty);
        assert_eq!((counts.total, counts.completed, counts.pending), (0, 0, 0));
        assert!(filter_tasks(&empty, &TaskFilter::Completed).is_empty());
        assert_eq!(progress_percent(&empty), 0);
    }

    #[test]
    fn progress_rounds_to_nearest_percent() {
        let tasks = vec![
            task("a", TaskCategory::Teaching, true),
            task("b", TaskCategory::Teaching, false),
            task("c", TaskCategory::Service, false),
        ];
        assert_eq!(progress_percent(&tasks), 33);
    }
}
