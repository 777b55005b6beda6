//! SQLite bootstrap behind [`SqliteLocalStore`](crate::repo::local_store::SqliteLocalStore).
//!
//! Failures surface as [`StoreError`](crate::repo::local_store::StoreError);
//! the store is the only consumer, so there is no separate database error.
//!
//! # See also
//! - `repo::local_store` for the key/value contract built on these tables.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
