use worktrack_core::repo::local_store::{LocalStore, SqliteLocalStore, StoreError};

#[test]
fn sqlite_store_upserts_and_lists_keys() {
    let mut store = SqliteLocalStore::open_in_memory().unwrap();
    assert_eq!(store.get_item("user").unwrap(), None);

    store.set_item("user", "first").unwrap();
    store.set_item("user", "second").unwrap();
    store.set_item("preferences", "{}").unwrap();

    assert_eq!(store.get_item("user").unwrap().as_deref(), Some("second"));
    assert_eq!(store.keys().unwrap(), vec!["preferences", "user"]);
}

#[test]
fn sqlite_store_trims_keys_and_rejects_blank_ones() {
    let mut store = SqliteLocalStore::open_in_memory().unwrap();
    store.set_item("  user ", "value").unwrap();
    assert_eq!(store.get_item("user").unwrap().as_deref(), Some("value"));

    let err = store.get_item("   ").unwrap_err();
    assert!(matches!(err, StoreError::InvalidKey(_)));
}

#[test]
fn values_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local.sqlite3");

    let mut store = SqliteLocalStore::open(&path).unwrap();
    store.set_item("user", "persisted").unwrap();
    drop(store);

    let mut reopened = SqliteLocalStore::open(&path).unwrap();
    assert_eq!(
        reopened.get_item("user").unwrap().as_deref(),
        Some("persisted")
    );
    reopened.remove_item("user").unwrap();
    reopened.remove_item("user").unwrap();
    assert_eq!(reopened.get_item("user").unwrap(), None);
}
