//! Demo records loaded at startup.
//!
//! # Responsibility
//! - Provide the in-memory data the services start from.
//!
//! # Invariants
//! - Seed IDs are deterministic so shells can address records across runs.
//! - Seeded task statuses are derived, never hand-written.

use crate::model::submission::{AppraisalSubmission, SubmissionStatus, TaskSnapshot};
use crate::model::task::{AppraisalTask, TaskCategory, TaskStatus};
use crate::model::timesheet::{ActivityType, EntrySpan, TimeEntry};
use chrono::NaiveDate;
use uuid::Uuid;

const SEED_TASK_NAMESPACE: u128 = 0x1000;
const SEED_ENTRY_NAMESPACE: u128 = 0x2000;
const SEED_PERIOD_ENTRY_NAMESPACE: u128 = 0x3000;
const SEED_SUBMISSION_NAMESPACE: u128 = 0x4000;
const DEFAULT_TOTAL_MARKS: u32 = 10;

/// Deterministic ID of the `n`-th seeded task (1-based).
pub fn seed_task_id(n: u128) -> Uuid {
    Uuid::from_u128(SEED_TASK_NAMESPACE + n)
}

/// Deterministic ID of the `n`-th seeded submission (1-based).
pub fn seed_submission_id(n: u128) -> Uuid {
    Uuid::from_u128(SEED_SUBMISSION_NAMESPACE + n)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

/// Semester task board for the demo staff member.
pub fn demo_tasks() -> Vec<AppraisalTask> {
    let rows: [(&str, TaskCategory, &str, bool, &[&str], NaiveDate); 6] = [
        (
            "Lecture Materials",
            TaskCategory::Teaching,
            "Prepare and update lecture materials for all assigned courses",
            true,
            &["lecture_slides.pdf"],
            date(2023, 5, 1),
        ),
        (
            "Student Feedback Analysis",
            TaskCategory::Teaching,
            "Analyze student feedback from previous semester and implement improvements",
            true,
            &["feedback_analysis.pdf"],
            date(2023, 4, 15),
        ),
        (
            "NPTEL Certification",
            TaskCategory::Professional,
            "Complete at least one NPTEL certification course relevant to teaching area",
            false,
            &[],
            date(2023, 6, 30),
        ),
        (
            "Research Paper Publication",
            TaskCategory::Research,
            "Publish at least one research paper in a recognized journal or conference",
            false,
            &["draft_paper.pdf"],
            date(2023, 7, 15),
        ),
        (
            "Workshop Attendance",
            TaskCategory::Professional,
            "Attend at least one professional development workshop",
            false,
            &[],
            date(2023, 5, 30),
        ),
        (
            "Mentoring Program",
            TaskCategory::Service,
            "Participate in the institution's student mentoring program",
            true,
            &["mentoring_report.pdf"],
            date(2023, 4, 30),
        ),
    ];

    rows.into_iter()
        .zip(1u128..)
        .map(|((title, category, description, completed, documents, deadline), n)| {
            let mut task =
                AppraisalTask::with_id(seed_task_id(n), title, category, description, deadline);
            task.total_marks = DEFAULT_TOTAL_MARKS;
            task.score = if completed { DEFAULT_TOTAL_MARKS } else { 0 };
            task.documents = documents.iter().map(|doc| doc.to_string()).collect();
            task.set_completed(completed);
            task
        })
        .collect()
}

/// Recent free-duration timesheet entries, newest first.
pub fn demo_time_entries() -> Vec<TimeEntry> {
    let rows = [
        (
            date(2023, 4, 14),
            3.0,
            ActivityType::Teaching,
            "Conducted advanced database lecture for 3rd year students",
        ),
        (
            date(2023, 4, 14),
            2.0,
            ActivityType::Mentoring,
            "Student project mentoring and guidance",
        ),
        (
            date(2023, 4, 14),
            3.0,
            ActivityType::Research,
            "Working on research paper for upcoming conference",
        ),
        (
            date(2023, 4, 13),
            4.0,
            ActivityType::Teaching,
            "Prepared and delivered programming fundamentals lecture",
        ),
        (
            date(2023, 4, 13),
            3.5,
            ActivityType::Administrative,
            "Department meeting and curriculum planning",
        ),
    ];

    rows.into_iter()
        .zip(1u128..)
        .map(|((day, hours, activity, description), n)| TimeEntry {
            id: Uuid::from_u128(SEED_ENTRY_NAMESPACE + n),
            date: day,
            span: EntrySpan::Hours(hours),
            activity,
            description: description.to_string(),
        })
        .collect()
}

/// Period entries for `day` (periods 1, 2 and 4).
pub fn demo_period_entries(day: NaiveDate) -> Vec<TimeEntry> {
    let rows = [
        (
            1u8,
            ActivityType::Teaching,
            "Conducted advanced database lecture for 3rd year students",
        ),
        (
            2,
            ActivityType::Mentoring,
            "Student project mentoring and guidance",
        ),
        (
            4,
            ActivityType::Research,
            "Working on research paper for upcoming conference",
        ),
    ];

    rows.into_iter()
        .map(|(period_id, activity, description)| TimeEntry {
            id: Uuid::from_u128(SEED_PERIOD_ENTRY_NAMESPACE + u128::from(period_id)),
            date: day,
            span: EntrySpan::Period(period_id),
            activity,
            description: description.to_string(),
        })
        .collect()
}

fn snapshot(
    title: &str,
    category: TaskCategory,
    description: &str,
    documents: &[&str],
) -> TaskSnapshot {
    TaskSnapshot {
        title: title.to_string(),
        category,
        description: description.to_string(),
        status: TaskStatus::Completed,
        documents: documents.iter().map(|doc| doc.to_string()).collect(),
    }
}

/// Pending submissions awaiting review.
pub fn demo_submissions() -> Vec<AppraisalSubmission> {
    use TaskCategory::{Professional, Research, Service, Teaching};

    let rows: Vec<(&str, &str, &str, NaiveDate, Vec<TaskSnapshot>)> = vec![
        (
            "John Smith",
            "Computer Science",
            "Assistant Professor",
            date(2023, 4, 10),
            vec![
                snapshot(
                    "Lecture Materials Update",
                    Teaching,
                    "Updated lecture materials for Java Programming course",
                    &["java_lecture_slides.pdf"],
                ),
                snapshot(
                    "Student Mentoring",
                    Service,
                    "Mentored 10 students for their final year projects",
                    &["mentoring_report.pdf", "student_feedback.pdf"],
                ),
                snapshot(
                    "Research Paper",
                    Research,
                    "Published a paper on machine learning applications",
                    &["research_paper.pdf", "publication_certificate.pdf"],
                ),
                snapshot(
                    "NPTEL Course Completion",
                    Professional,
                    "Completed NPTEL course on Advanced Algorithms",
                    &["nptel_certificate.pdf"],
                ),
            ],
        ),
        (
            "Emily Johnson",
            "Electronics",
            "Associate Professor",
            date(2023, 4, 12),
            vec![
                snapshot(
                    "Laboratory Manual Update",
                    Teaching,
                    "Updated the Digital Electronics lab manual with new experiments",
                    &["lab_manual.pdf"],
                ),
                snapshot(
                    "FDP Attendance",
                    Professional,
                    "Attended Faculty Development Program on IoT",
                    &["fdp_certificate.pdf"],
                ),
                snapshot(
                    "Student Project Guidance",
                    Service,
                    "Guided students for national level technical competition",
                    &["project_report.pdf", "competition_results.pdf"],
                ),
            ],
        ),
        (
            "Robert Williams",
            "Mechanical Engineering",
            "Professor",
            date(2023, 4, 8),
            vec![
                snapshot(
                    "Research Grant",
                    Research,
                    "Secured research grant from industry partner",
                    &["grant_letter.pdf", "proposal.pdf"],
                ),
                snapshot(
                    "Conference Paper",
                    Research,
                    "Presented paper at International Conference on Manufacturing",
                    &["conference_paper.pdf", "presentation.pdf"],
                ),
                snapshot(
                    "Course Materials",
                    Teaching,
                    "Developed new course materials for Design of Machine Elements",
                    &["course_materials.pdf"],
                ),
                snapshot(
                    "Industry Visit",
                    Service,
                    "Organized industry visit for final year students",
                    &["visit_report.pdf", "feedback.pdf"],
                ),
            ],
        ),
        (
            "Sarah Davis",
            "Computer Science",
            "Assistant Professor",
            date(2023, 4, 11),
            vec![
                snapshot(
                    "NPTEL Coordination",
                    Service,
                    "Coordinated NPTEL course enrollments for the department",
                    &["nptel_report.pdf", "student_list.pdf"],
                ),
                snapshot(
                    "Workshop Organization",
                    Service,
                    "Organized workshop on Web Development",
                    &["workshop_brochure.pdf", "attendance.pdf"],
                ),
                snapshot(
                    "Course Completion",
                    Teaching,
                    "Completed all assigned courses with good student feedback",
                    &["feedback_analysis.pdf"],
                ),
            ],
        ),
        (
            "Michael Brown",
            "Mathematics",
            "Professor",
            date(2023, 4, 9),
            vec![
                snapshot(
                    "Textbook Publication",
                    Research,
                    "Published a textbook on Advanced Calculus",
                    &["book_cover.pdf", "publisher_letter.pdf"],
                ),
                snapshot(
                    "Question Bank",
                    Teaching,
                    "Developed comprehensive question bank for all courses",
                    &["question_bank.pdf"],
                ),
                snapshot(
                    "FDP Conduction",
                    Service,
                    "Conducted FDP on Mathematical Modeling",
                    &["fdp_brochure.pdf", "schedule.pdf"],
                ),
            ],
        ),
    ];

    rows.into_iter()
        .zip(1u128..)
        .map(
            |((staff_name, department, designation, submitted_on, tasks), n)| {
                AppraisalSubmission {
                    id: seed_submission_id(n),
                    staff_name: staff_name.to_string(),
                    department: department.to_string(),
                    designation: designation.to_string(),
                    submitted_on,
                    status: SubmissionStatus::Pending,
                    tasks,
                    remarks: None,
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{demo_submissions, demo_tasks, demo_time_entries};
    use crate::model::task::TaskStatus;

    #[test]
    fn seeded_tasks_are_valid_with_derived_status() {
        let tasks = demo_tasks();
        assert_eq!(tasks.len(), 6);
        for task in &tasks {
            task.validate().expect("seed task must validate");
            assert_eq!(task.status, TaskStatus::derive(task.completed, &task.documents));
        }
        assert_eq!(tasks[3].status, TaskStatus::InProgress);
        assert_eq!(tasks[4].status, TaskStatus::NotStarted);
    }

    #[test]
    fn seeded_queue_is_all_pending() {
        let submissions = demo_submissions();
        assert_eq!(submissions.len(), 5);
        assert!(submissions.iter().all(|submission| submission.is_pending()));
        assert_eq!(demo_time_entries().len(), 5);
    }
}
