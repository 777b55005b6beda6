//! Core use-case services.
//!
//! # Responsibility
//! - Turn form inputs into validated model mutations.
//! - Call gateway ports before changing in-memory state.
//! - Keep UI/FFI layers decoupled from storage and transport details.

pub mod appraisal_service;
pub mod dashboard_service;
pub mod preferences_service;
pub mod review_service;
pub mod timesheet_service;
