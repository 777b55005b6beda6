//! User identity model.
//!
//! # Responsibility
//! - Define the directory record held by the session after login.
//! - Keep the role set closed so policy matches stay exhaustive.
//!
//! # Invariants
//! - `id` is unique within one directory.
//! - User records are never mutated after lookup.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Directory identifier. Seeded directories use short numeric strings.
pub type UserId = String;

/// Institutional role that drives access policy and navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Faculty member; sees only their own record.
    Staff,
    /// Head of department; sees staff of the same department.
    #[serde(rename = "hod", alias = "department_head")]
    DepartmentHead,
    /// Institution principal; sees everyone.
    Principal,
    /// Administrator; sees everyone and owns the review queue.
    Admin,
}

impl UserRole {
    /// All roles in ascending privilege order.
    pub const ALL: [UserRole; 4] = [
        UserRole::Staff,
        UserRole::DepartmentHead,
        UserRole::Principal,
        UserRole::Admin,
    ];

    /// Stable wire value, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::DepartmentHead => "hod",
            Self::Principal => "principal",
            Self::Admin => "admin",
        }
    }

    /// Human-readable label for headers and menus.
    pub fn label(self) -> &'static str {
        match self {
            Self::Staff => "Staff",
            Self::DepartmentHead => "Head of Department",
            Self::Principal => "Principal",
            Self::Admin => "Administrator",
        }
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses one role from its wire value.
///
/// Accepts `department_head` as an alias of `hod`. Matching is exact after
/// trimming; anything else is rejected.
pub fn parse_user_role(value: &str) -> Result<UserRole, UserRoleError> {
    match value.trim() {
        "staff" => Ok(UserRole::Staff),
        "hod" | "department_head" => Ok(UserRole::DepartmentHead),
        "principal" => Ok(UserRole::Principal),
        "admin" => Ok(UserRole::Admin),
        other => Err(UserRoleError::Unsupported(other.to_string())),
    }
}

/// Role parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRoleError {
    Unsupported(String),
}

impl Display for UserRoleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported(value) => write!(f, "user role is unsupported: `{value}`"),
        }
    }
}

impl Error for UserRoleError {}

/// Directory record for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Display name shown in greetings and headers.
    pub name: String,
    /// Login key; matched exactly.
    pub email: String,
    pub role: UserRole,
    /// Principals and admins usually have no department.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl User {
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            department: None,
        }
    }

    /// Builder-style department assignment.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
