//! Domain model for the timesheet and appraisal tracker.
//!
//! # Responsibility
//! - Define the records shared by policy, aggregation and services.
//! - Keep tag sets (roles, categories, activities, statuses) closed enums.
//!
//! # Invariants
//! - Wire values are `snake_case` and stable.
//! - Derived fields (task status) are recomputed on every mutation.

pub mod preferences;
pub mod submission;
pub mod task;
pub mod timesheet;
pub mod user;
