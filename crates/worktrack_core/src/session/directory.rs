//! Static user directory and the demo credential check.
//!
//! # Invariants
//! - Email lookup is an exact, case-sensitive match.
//! - The only accepted password is [`DEMO_PASSWORD`]; this is a demo gate,
//!   not a security model.

use crate::gateway::{AuthGateway, GatewayResult};
use crate::model::user::{User, UserRole};
use log::debug;
use std::time::Duration;

/// Literal password accepted for every directory entry.
pub const DEMO_PASSWORD: &str = "password";

/// Read-only list of known users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Institution demo directory (ten users, every role represented).
    pub fn demo() -> Self {
        const CS: &str = "Computer Science";
        Self::new(vec![
            User::new("1", "Abirami", "staff@example.com", UserRole::Staff).with_department(CS),
            User::new("2", "Nandhini", "hod@example.com", UserRole::DepartmentHead)
                .with_department(CS),
            User::new("3", "Muruganandham", "principal@example.com", UserRole::Principal),
            User::new("4", "Aruna", "admin@example.com", UserRole::Admin),
            User::new("5", "Kavitha", "kavitha@example.com", UserRole::Staff).with_department(CS),
            User::new("6", "Priya", "priya@example.com", UserRole::Staff)
                .with_department("Information Technology"),
            User::new("7", "Sumitha", "sumitha@example.com", UserRole::Staff)
                .with_department("Electronics"),
            User::new("8", "Santhosh", "santhosh@example.com", UserRole::Staff)
                .with_department("Mechanical"),
            User::new("9", "Vinith", "vinith@example.com", UserRole::Staff)
                .with_department("Civil"),
            User::new("10", "Suresh", "suresh@example.com", UserRole::Staff)
                .with_department("Electrical"),
        ])
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::demo()
    }
}

/// Auth port over a [`UserDirectory`] with simulated latency.
#[derive(Debug, Clone)]
pub struct DirectoryAuthGateway {
    directory: UserDirectory,
    latency: Duration,
}

impl DirectoryAuthGateway {
    pub fn new(directory: UserDirectory, latency: Duration) -> Self {
        Self { directory, latency }
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }
}

impl AuthGateway for DirectoryAuthGateway {
    fn authenticate(&self, email: &str, password: &str) -> GatewayResult<Option<User>> {
        debug!(
            "event=gateway_call module=gateway status=simulated op=authenticate latency_ms={}",
            self.latency.as_millis()
        );
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }

        let matched = self
            .directory
            .find_by_email(email)
            .filter(|_| password == DEMO_PASSWORD)
            .cloned();
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::{DirectoryAuthGateway, UserDirectory, DEMO_PASSWORD};
    use crate::gateway::AuthGateway;
    use crate::model::user::UserRole;
    use std::collections::HashSet;
    use std::time::Duration;

    #[test]
    fn demo_directory_has_unique_ids_and_emails() {
        let directory = UserDirectory::demo();
        let ids = directory.users().iter().map(|u| u.id.as_str()).collect::<HashSet<_>>();
        let emails = directory
            .users()
            .iter()
            .map(|u| u.email.as_str())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), 10);
        assert_eq!(emails.len(), 10);
        for role in UserRole::ALL {
            assert!(directory.users().iter().any(|user| user.role == role));
        }
    }

    #[test]
    fn email_lookup_is_exact() {
        let directory = UserDirectory::demo();
        assert!(directory.find_by_email("admin@example.com").is_some());
        assert!(directory.find_by_email("Admin@example.com").is_none());
        assert!(directory.find_by_email(" admin@example.com").is_none());
    }

    #[test]
    fn gateway_requires_demo_password() {
        let gateway = DirectoryAuthGateway::new(UserDirectory::demo(), Duration::ZERO);
        assert!(gateway
            .authenticate("staff@example.com", DEMO_PASSWORD)
            .expect("auth call")
            .is_some());
        assert!(gateway
            .authenticate("staff@example.com", "hunter2")
            .expect("auth call")
            .is_none());
    }
}
