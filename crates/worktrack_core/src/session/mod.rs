//! Session management.
//!
//! # Responsibility
//! - Look users up in the static directory and check the demo password.
//! - Hold the current user and persist it in local storage.
//!
//! # See also
//! - `policy::access` for what a session may see.

pub mod directory;
pub mod store;
