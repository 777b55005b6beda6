use chrono::NaiveDate;
use std::cell::Cell;
use worktrack_core::aggregate::tasks::TaskFilter;
use worktrack_core::gateway::{AppraisalGateway, GatewayError, GatewayResult, SimulatedGateway};
use worktrack_core::model::task::{
    AppraisalTask, TaskCategory, TaskId, TaskStatus, TaskValidationError,
};
use worktrack_core::model::user::{User, UserRole};
use worktrack_core::seed::{demo_tasks, seed_task_id};
use worktrack_core::service::appraisal_service::{
    AppraisalError, AppraisalService, NewTaskRequest,
};

fn deadline() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 8, 1).unwrap()
}

fn staff() -> User {
    User::new("1", "Abirami", "staff@example.com", UserRole::Staff)
        .with_department("Computer Science")
}

fn board() -> AppraisalService<SimulatedGateway> {
    AppraisalService::with_tasks(SimulatedGateway::instant(), demo_tasks())
}

#[test]
fn added_task_is_appended_incomplete() {
    let mut service = board();
    let mut request = NewTaskRequest::new(
        "Guest Lecture",
        TaskCategory::Extension,
        "Deliver a guest lecture at a partner college",
        deadline(),
    );
    request.total_marks = 5;
    let added = service.add_task(request).unwrap().clone();

    assert_eq!(added.status, TaskStatus::NotStarted);
    assert!(!added.completed);
    assert_eq!(service.tasks().last(), Some(&added));
    assert_eq!(
        service
            .list(&TaskFilter::Category(TaskCategory::Extension))
            .len(),
        1
    );
}

#[test]
fn invalid_task_requests_are_rejected() {
    let mut service = board();
    let blank = NewTaskRequest::new("  ", TaskCategory::Research, "details", deadline());
    assert!(matches!(
        service.add_task(blank).unwrap_err(),
        AppraisalError::Validation(TaskValidationError::BlankTitle)
    ));

    let mut over = NewTaskRequest::new("Paper", TaskCategory::Research, "details", deadline());
    over.score = 12;
    over.total_marks = 10;
    assert!(matches!(
        service.add_task(over).unwrap_err(),
        AppraisalError::Validation(TaskValidationError::ScoreExceedsTotal { .. })
    ));
    assert_eq!(service.tasks().len(), 6);
}

#[test]
fn completion_toggle_rederives_status() {
    let mut service = board();
    let research = seed_task_id(4);

    let task = service.set_completed(research, true).unwrap();
    assert_eq!(task.status, TaskStatus::Completed);
    let task = service.set_completed(research, false).unwrap();
    assert_eq!(task.status, TaskStatus::InProgress);

    let missing = TaskId::from_u128(42);
    assert!(matches!(
        service.set_completed(missing, true).unwrap_err(),
        AppraisalError::TaskNotFound(id) if id == missing
    ));
}

#[test]
fn document_upload_moves_task_in_progress() {
    let mut service = board();
    let nptel = seed_task_id(3);

    let task = service
        .attach_document(nptel, Some("nptel_certificate.pdf".to_string()))
        .unwrap();
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.documents, vec!["nptel_certificate.pdf"]);

    let task = service.attach_document(nptel, None).unwrap();
    let generated = &task.documents[1];
    assert!(generated.starts_with("file_") && generated.ends_with(".pdf"));
}

#[test]
fn submission_requires_full_completion() {
    let mut service = board();
    let err = service.submit_for_review(&staff()).unwrap_err();
    assert!(matches!(err, AppraisalError::Incomplete { progress: 50 }));

    let pending: Vec<_> = service
        .list(&TaskFilter::Pending)
        .into_iter()
        .map(|task| task.id)
        .collect();
    for id in pending {
        service.set_completed(id, true).unwrap();
    }
    assert_eq!(service.progress(), 100);
    service.submit_for_review(&staff()).unwrap();
}

#[test]
fn empty_board_cannot_be_submitted() {
    let service = AppraisalService::new(SimulatedGateway::instant());
    assert!(matches!(
        service.submit_for_review(&staff()).unwrap_err(),
        AppraisalError::Incomplete { progress: 0 }
    ));
}

#[derive(Default)]
struct OfflineGateway {
    attempts: Cell<usize>,
}

impl AppraisalGateway for OfflineGateway {
    fn save_task(&self, _task: &AppraisalTask) -> GatewayResult<()> {
        self.fail()
    }

    fn upload_document(&self, _task_id: TaskId, _document: &str) -> GatewayResult<()> {
        self.fail()
    }

    fn submit_appraisal(&self, _staff: &User, _tasks: &[AppraisalTask]) -> GatewayResult<()> {
        self.fail()
    }
}

impl OfflineGateway {
    fn fail(&self) -> GatewayResult<()> {
        self.attempts.set(self.attempts.get() + 1);
        Err(GatewayError::Unavailable("upload server offline".to_string()))
    }
}

#[test]
fn gateway_failures_leave_the_board_unchanged() {
    let mut service = AppraisalService::with_tasks(OfflineGateway::default(), demo_tasks());
    let before = service.tasks().to_vec();

    let request =
        NewTaskRequest::new("Seminar", TaskCategory::Service, "Host a seminar", deadline());
    assert!(matches!(
        service.add_task(request).unwrap_err(),
        AppraisalError::Gateway(_)
    ));
    assert!(matches!(
        service
            .attach_document(seed_task_id(5), Some("agenda.pdf".to_string()))
            .unwrap_err(),
        AppraisalError::Gateway(_)
    ));

    assert_eq!(service.tasks(), before.as_slice());
    assert_eq!(service.gateway().attempts.get(), 2);
}
