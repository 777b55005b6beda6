//! Record visibility rules.
//!
//! # Responsibility
//! - Decide which user records and submissions a viewer may see.
//! - Decide who may act on the review queue.
//!
//! # Invariants
//! - Every function here is pure and total.
//! - A missing viewer (logged out) is always denied.
//! - Department matching requires both sides to carry the same department;
//!   a missing department never matches.

use crate::model::submission::AppraisalSubmission;
use crate::model::user::{User, UserRole};

/// Returns whether `viewer` may see `target`'s details.
///
/// | viewer role | visible targets                           |
/// |-------------|-------------------------------------------|
/// | admin       | everyone                                  |
/// | principal   | everyone                                  |
/// | hod         | staff-role users of the same department   |
/// | staff       | only themselves                           |
pub fn can_view_user(viewer: &User, target: &User) -> bool {
    match viewer.role {
        UserRole::Admin | UserRole::Principal => true,
        UserRole::DepartmentHead => {
            target.role == UserRole::Staff && same_department(viewer, target.department.as_deref())
        }
        UserRole::Staff => target.id == viewer.id,
    }
}

/// Session-aware variant of [`can_view_user`].
pub fn can_view(viewer: Option<&User>, target: &User) -> bool {
    viewer.is_some_and(|viewer| can_view_user(viewer, target))
}

/// Filters `users` down to the records `viewer` may see, preserving order.
pub fn visible_users<'a>(viewer: &User, users: &'a [User]) -> Vec<&'a User> {
    users
        .iter()
        .filter(|target| can_view_user(viewer, target))
        .collect()
}

/// Returns whether `viewer` may open the review queue at all.
pub fn can_review(viewer: &User) -> bool {
    match viewer.role {
        UserRole::Admin | UserRole::Principal | UserRole::DepartmentHead => true,
        UserRole::Staff => false,
    }
}

/// Returns whether `viewer` may see and decide one submission.
pub fn can_review_submission(viewer: &User, submission: &AppraisalSubmission) -> bool {
    match viewer.role {
        UserRole::Admin | UserRole::Principal => true,
        UserRole::DepartmentHead => same_department(viewer, Some(submission.department.as_str())),
        UserRole::Staff => false,
    }
}

fn same_department(viewer: &User, department: Option<&str>) -> bool {
    match (viewer.department.as_deref(), department) {
        (Some(own), Some(other)) => own == other,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{can_view, can_view_user, visible_users};
    use crate::model::user::{User, UserRole};

    fn staff(id: &str, department: &str) -> User {
        User::new(id, id, format!("{id}@example.com"), UserRole::Staff).with_department(department)
    }

    #[test]
    fn logged_out_viewer_is_denied() {
        assert!(!can_view(None, &staff("1", "Civil")));
    }

    #[test]
    fn hod_without_department_sees_nobody() {
        let hod = User::new("2", "Head", "hod@example.com", UserRole::DepartmentHead);
        let orphan = User::new("9", "Orphan", "orphan@example.com", UserRole::Staff);
        assert!(!can_view_user(&hod, &orphan));
    }

    #[test]
    fn visible_users_preserves_directory_order() {
        let hod = User::new("2", "Head", "hod@example.com", UserRole::DepartmentHead)
            .with_department("Civil");
        let users = vec![staff("5", "Civil"), staff("6", "Mechanical"), staff("7", "Civil")];
        let ids = visible_users(&hod, &users)
            .into_iter()
            .map(|user| user.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["5", "7"]);
    }
}
