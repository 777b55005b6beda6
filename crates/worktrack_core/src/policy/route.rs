//! Route table and route-level gating for the UI shell.
//!
//! # Responsibility
//! - Map shell paths to a closed set of routes.
//! - Decide redirects for unauthenticated users and restricted pages.
//! - Provide role-dependent navigation and page titles.
//!
//! # Invariants
//! - Unknown paths map to `Route::NotFound`, never an error.
//! - Logged-out users can only reach login and not-found.
//!
//! # See also
//! - `policy::access` for record-level checks.

use crate::model::user::{User, UserRole};

/// One navigable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Timesheet,
    Appraisal,
    Admin,
    Settings,
    Help,
    NotFound,
}

impl Route {
    /// Parses a shell path. `/` is the dashboard index.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        match normalized {
            "" if trimmed.starts_with('/') => Self::Dashboard,
            "/dashboard" => Self::Dashboard,
            "/login" => Self::Login,
            "/timesheet" => Self::Timesheet,
            "/appraisal" => Self::Appraisal,
            "/admin" => Self::Admin,
            "/settings" => Self::Settings,
            "/help" => Self::Help,
            _ => Self::NotFound,
        }
    }

    /// Canonical path. Not-found has no canonical path and renders `*`.
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Timesheet => "/timesheet",
            Self::Appraisal => "/appraisal",
            Self::Admin => "/admin",
            Self::Settings => "/settings",
            Self::Help => "/help",
            Self::NotFound => "*",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Dashboard => "Dashboard",
            Self::Timesheet => "Timesheet",
            Self::Appraisal => "Appraisal",
            Self::Admin => "Admin Review",
            Self::Settings => "Settings",
            Self::Help => "Help & Support",
            Self::NotFound => "Not Found",
        }
    }
}

/// Outcome of a route check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Allow,
    RedirectTo(Route),
}

/// Decides whether `user` may render `route`.
pub fn route_access(user: Option<&User>, route: Route) -> RouteAccess {
    match (user, route) {
        (_, Route::NotFound) => RouteAccess::Allow,
        (None, Route::Login) => RouteAccess::Allow,
        (None, _) => RouteAccess::RedirectTo(Route::Login),
        (Some(_), Route::Login) => RouteAccess::RedirectTo(Route::Dashboard),
        (Some(user), Route::Admin) => match user.role {
            UserRole::Admin | UserRole::Principal | UserRole::DepartmentHead => RouteAccess::Allow,
            UserRole::Staff => RouteAccess::RedirectTo(Route::Dashboard),
        },
        (Some(_), _) => RouteAccess::Allow,
    }
}

/// Heading of the review page for roles allowed to open it.
pub fn admin_page_title(role: UserRole) -> Option<&'static str> {
    match role {
        UserRole::Principal => Some("All Staff Review"),
        UserRole::DepartmentHead => Some("Department Staff Review"),
        UserRole::Admin => Some("Administration Review"),
        UserRole::Staff => None,
    }
}

/// Sidebar entries in display order.
pub fn navigation(user: &User) -> Vec<Route> {
    let mut routes = vec![Route::Dashboard, Route::Timesheet, Route::Appraisal];
    if user.is_admin() {
        routes.push(Route::Admin);
    }
    routes.extend([Route::Settings, Route::Help]);
    routes
}

#[cfg(test)]
mod tests {
    use super::{navigation, route_access, Route, RouteAccess};
    use crate::model::user::{User, UserRole};

    #[test]
    fn parse_handles_index_trailing_slash_and_unknown_paths() {
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse("/timesheet/"), Route::Timesheet);
        assert_eq!(Route::parse("/reports"), Route::NotFound);
        assert_eq!(Route::parse(""), Route::NotFound);
    }

    #[test]
    fn logged_out_user_is_sent_to_login() {
        assert_eq!(
            route_access(None, Route::Appraisal),
            RouteAccess::RedirectTo(Route::Login)
        );
        assert_eq!(route_access(None, Route::Login), RouteAccess::Allow);
        assert_eq!(route_access(None, Route::NotFound), RouteAccess::Allow);
    }

    #[test]
    fn staff_cannot_open_admin_page() {
        let staff = User::new("1", "Abirami", "staff@example.com", UserRole::Staff);
        assert_eq!(
            route_access(Some(&staff), Route::Admin),
            RouteAccess::RedirectTo(Route::Dashboard)
        );
        assert_eq!(
            route_access(Some(&staff), Route::Login),
            RouteAccess::RedirectTo(Route::Dashboard)
        );
    }

    #[test]
    fn only_admin_gets_admin_navigation_item() {
        let admin = User::new("4", "Aruna", "admin@example.com", UserRole::Admin);
        let hod = User::new("2", "Nandhini", "hod@example.com", UserRole::DepartmentHead);
        assert!(navigation(&admin).contains(&Route::Admin));
        assert!(!navigation(&hod).contains(&Route::Admin));
        assert_eq!(navigation(&hod).len(), 5);
    }
}
