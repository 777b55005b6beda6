use chrono::NaiveDate;
use worktrack_core::aggregate::tasks::{
    category_summaries, count_tasks, filter_tasks, progress_percent, status_counts, TaskFilter,
};
use worktrack_core::model::task::{AppraisalTask, TaskCategory};
use worktrack_core::seed::demo_tasks;

fn all_filters() -> Vec<TaskFilter> {
    let mut filters = vec![TaskFilter::All, TaskFilter::Completed, TaskFilter::Pending];
    filters.extend(TaskCategory::ALL.into_iter().map(TaskFilter::Category));
    filters
}

/// Deterministic mix of categories and completion flags.
fn generated_tasks(count: usize) -> Vec<AppraisalTask> {
    let deadline = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
    (0..count)
        .map(|n| {
            let category = TaskCategory::ALL[n % TaskCategory::ALL.len()];
            let mut task = AppraisalTask::new(format!("task {n}"), category, "details", deadline);
            task.set_completed(n % 3 == 0);
            task
        })
        .collect()
}

#[test]
fn filtered_results_satisfy_filter_in_source_order() {
    for size in [0, 1, 7, 23] {
        let tasks = generated_tasks(size);
        for filter in all_filters() {
            let filtered = filter_tasks(&tasks, &filter);
            assert!(filtered.iter().all(|task| filter.matches(task)));

            let expected: Vec<_> = tasks.iter().filter(|task| filter.matches(task)).collect();
            assert_eq!(filtered, expected, "size={size} filter={filter:?}");
        }
    }
}

#[test]
fn completed_plus_pending_equals_all() {
    for size in [0, 1, 5, 30] {
        let tasks = generated_tasks(size);
        let counts = count_tasks(&tasks);
        assert_eq!(counts.total, size);
        assert_eq!(counts.completed + counts.pending, counts.total);
        assert_eq!(
            filter_tasks(&tasks, &TaskFilter::Completed).len()
                + filter_tasks(&tasks, &TaskFilter::Pending).len(),
            filter_tasks(&tasks, &TaskFilter::All).len()
        );
    }
}

#[test]
fn category_summaries_partition_the_board() {
    let tasks = demo_tasks();
    let summaries = category_summaries(&tasks);
    assert_eq!(summaries.len(), TaskCategory::ALL.len());
    let total: usize = summaries.iter().map(|summary| summary.counts.total).sum();
    assert_eq!(total, tasks.len());

    let teaching = summaries
        .iter()
        .find(|summary| summary.category == TaskCategory::Teaching)
        .unwrap();
    assert_eq!(teaching.counts.completed, 2);
    assert_eq!(teaching.counts.pending, 0);

    let extension = summaries
        .iter()
        .find(|summary| summary.category == TaskCategory::Extension)
        .unwrap();
    assert_eq!(extension.counts.total, 0);
}

#[test]
fn demo_board_is_half_done() {
    let tasks = demo_tasks();
    assert_eq!(progress_percent(&tasks), 50);

    let statuses = status_counts(&tasks);
    assert_eq!(statuses.completed, 3);
    assert_eq!(statuses.in_progress, 1);
    assert_eq!(statuses.not_started, 2);
}

#[test]
fn filter_keys_parse_from_shell_tabs() {
    assert_eq!("all-tasks".parse::<TaskFilter>().unwrap(), TaskFilter::All);
    assert_eq!(
        "research".parse::<TaskFilter>().unwrap(),
        TaskFilter::Category(TaskCategory::Research)
    );
    assert!("archived".parse::<TaskFilter>().is_err());
}
