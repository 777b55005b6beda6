//! Role-based access policy.
//!
//! # Responsibility
//! - Decide record visibility per viewer role.
//! - Gate shell routes and derive role-specific navigation.
//!
//! # Invariants
//! - Role matches are exhaustive; adding a role fails to compile until every
//!   rule handles it.

pub mod access;
pub mod route;
