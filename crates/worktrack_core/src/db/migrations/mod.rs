//! Local store schema history.
//!
//! # Invariants
//! - `version` values are strictly increasing and start at 1.
//! - The applied version is mirrored to `PRAGMA user_version`.
//! - Pending steps apply inside one transaction; a failed step leaves the
//!   file at its previous version.
//! - A file stamped with a version this build does not know is refused.

use crate::repo::local_store::{StoreError, StoreResult};
use log::info;
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "local_storage",
    sql: include_str!("0001_local_storage.sql"),
}];

/// Newest schema version this build understands.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Brings the local store schema up to [`latest_version`].
///
/// Returns how many steps were applied; zero for an up-to-date file.
///
/// # Errors
/// - [`StoreError::SchemaTooNew`] for a file written by a newer build.
/// - [`StoreError::Sqlite`] when a step fails; nothing is committed.
pub fn apply_migrations(conn: &mut Connection) -> StoreResult<usize> {
    let found = schema_version(conn)?;
    let supported = latest_version();
    if found > supported {
        return Err(StoreError::SchemaTooNew { found, supported });
    }

    let pending: Vec<&Migration> = MIGRATIONS
        .iter()
        .filter(|migration| migration.version > found)
        .collect();
    if pending.is_empty() {
        return Ok(0);
    }

    let tx = conn.transaction()?;
    for migration in &pending {
        tx.execute_batch(migration.sql)?;
        tx.pragma_update(None, "user_version", migration.version)?;
        info!(
            "event=store_migrate module=db status=applied version={} name={}",
            migration.version, migration.name
        );
    }
    tx.commit()?;
    Ok(pending.len())
}

/// Reads the version stamp of an open local store file.
pub fn schema_version(conn: &Connection) -> StoreResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get::<_, u32>(0))?)
}
