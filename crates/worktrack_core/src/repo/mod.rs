//! Storage abstractions for durable client-side state.
//!
//! # Responsibility
//! - Define the local storage contract used by the session and preferences.
//! - Keep SQL details behind the `LocalStore` trait.
//!
//! # Invariants
//! - Only small opaque string values are stored (serialized records).
//! - Domain records (tasks, entries, submissions) are never persisted here.

pub mod local_store;
