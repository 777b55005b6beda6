use std::cell::RefCell;
use worktrack_core::aggregate::submissions::SubmissionFilter;
use worktrack_core::gateway::{GatewayError, GatewayResult, ReviewGateway, SimulatedGateway};
use worktrack_core::model::submission::{ReviewDecision, SubmissionId, SubmissionStatus};
use worktrack_core::model::user::{User, UserRole};
use worktrack_core::seed::{demo_submissions, seed_submission_id};
use worktrack_core::service::review_service::{ReviewError, ReviewService};

fn admin() -> User {
    User::new("4", "Aruna", "admin@example.com", UserRole::Admin)
}

fn queue() -> ReviewService<SimulatedGateway> {
    ReviewService::new(SimulatedGateway::instant(), demo_submissions())
}

#[test]
fn reject_without_remarks_is_refused_and_state_is_unchanged() {
    let mut service = queue();
    let id = seed_submission_id(1);

    let err = service.reject(&admin(), id, "   ").unwrap_err();
    assert!(matches!(err, ReviewError::RemarksRequired));
    assert_eq!(err.to_string(), "Please provide remarks for rejection");
    assert_eq!(
        service.select(&admin(), id).unwrap().status,
        SubmissionStatus::Pending
    );
}

#[test]
fn reject_with_remarks_moves_to_rejected_and_keeps_remarks() {
    let mut service = queue();
    let id = seed_submission_id(2);

    let rejected = service
        .reject(&admin(), id, "Missing FDP certificate")
        .unwrap();
    assert_eq!(rejected.status, SubmissionStatus::Rejected);
    assert_eq!(rejected.remarks.as_deref(), Some("Missing FDP certificate"));
}

#[test]
fn approve_then_reselect_shows_approved() {
    let mut service = queue();
    let id = seed_submission_id(1);

    service.approve(&admin(), id, None).unwrap();
    let selected = service.select(&admin(), id).unwrap();
    assert_eq!(selected.status, SubmissionStatus::Approved);
    assert_eq!(selected.remarks, None);

    let approved = service
        .list(&admin(), &SubmissionFilter::Status(SubmissionStatus::Approved))
        .unwrap();
    assert_eq!(approved.len(), 1);
    assert_eq!(service.pending_count(&admin()).unwrap(), 4);
}

#[test]
fn decisions_are_terminal() {
    let mut service = queue();
    let id = seed_submission_id(3);
    service.approve(&admin(), id, Some("Well documented")).unwrap();

    let err = service.reject(&admin(), id, "changed my mind").unwrap_err();
    assert!(matches!(
        err,
        ReviewError::AlreadyDecided {
            status: SubmissionStatus::Approved,
            ..
        }
    ));
}

#[test]
fn staff_cannot_open_the_queue() {
    let staff = User::new("1", "Abirami", "staff@example.com", UserRole::Staff)
        .with_department("Computer Science");
    let service = queue();
    let err = service.list(&staff, &SubmissionFilter::All).unwrap_err();
    assert!(matches!(
        err,
        ReviewError::Forbidden {
            role: UserRole::Staff
        }
    ));
}

#[test]
fn department_head_sees_only_their_department() {
    let hod = User::new("2", "Nandhini", "hod@example.com", UserRole::DepartmentHead)
        .with_department("Computer Science");
    let mut service = queue();

    let visible = service.list(&hod, &SubmissionFilter::All).unwrap();
    let names: Vec<_> = visible
        .iter()
        .map(|submission| submission.staff_name.as_str())
        .collect();
    assert_eq!(names, vec!["John Smith", "Sarah Davis"]);

    let electronics = seed_submission_id(2);
    let err = service.approve(&hod, electronics, None).unwrap_err();
    assert!(matches!(err, ReviewError::SubmissionNotFound(id) if id == electronics));
}

#[derive(Default)]
struct FailingGateway {
    calls: RefCell<Vec<(SubmissionId, ReviewDecision)>>,
}

impl ReviewGateway for FailingGateway {
    fn record_decision(
        &self,
        submission_id: SubmissionId,
        decision: ReviewDecision,
        _remarks: Option<&str>,
    ) -> GatewayResult<()> {
        self.calls.borrow_mut().push((submission_id, decision));
        Err(GatewayError::Unavailable("review backend offline".to_string()))
    }
}

#[test]
fn gateway_failure_leaves_submission_pending() {
    let mut service = ReviewService::new(FailingGateway::default(), demo_submissions());
    let id = seed_submission_id(4);

    let err = service.approve(&admin(), id, None).unwrap_err();
    assert!(matches!(err, ReviewError::Gateway(_)));
    assert_eq!(
        service.select(&admin(), id).unwrap().status,
        SubmissionStatus::Pending
    );
    assert_eq!(
        service.gateway().calls.borrow().as_slice(),
        &[(id, ReviewDecision::Approve)]
    );
}
