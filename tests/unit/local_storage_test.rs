//! Unit tests for the local storage backends.
//!
//! Both backends must behave the same through the `LocalStorage` trait.

use linkstack::database::Database;
use linkstack::services::local_storage::{LocalStorage, MemoryStorage, SqliteStorage};
use rstest::rstest;
use tempfile::TempDir;

fn memory() -> Box<dyn LocalStorage> {
    Box::new(MemoryStorage::new())
}

fn sqlite() -> Box<dyn LocalStorage> {
    Box::new(SqliteStorage::new(Database::open_in_memory().unwrap()))
}

#[rstest]
#[case::memory(memory())]
#[case::sqlite(sqlite())]
fn test_absent_key_is_none(#[case] storage: Box<dyn LocalStorage>) {
    assert_eq!(storage.get_item("bookmarks:linkstack").unwrap(), None);
}

#[rstest]
#[case::memory(memory())]
#[case::sqlite(sqlite())]
fn test_set_then_get(#[case] storage: Box<dyn LocalStorage>) {
    storage.set_item("bookmarks:linkstack", "[]").unwrap();
    assert_eq!(
        storage.get_item("bookmarks:linkstack").unwrap().as_deref(),
        Some("[]")
    );
}

#[rstest]
#[case::memory(memory())]
#[case::sqlite(sqlite())]
fn test_set_overwrites(#[case] storage: Box<dyn LocalStorage>) {
    storage.set_item("k", "first").unwrap();
    storage.set_item("k", "second").unwrap();
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("second"));
}

#[rstest]
#[case::memory(memory())]
#[case::sqlite(sqlite())]
fn test_keys_are_independent(#[case] storage: Box<dyn LocalStorage>) {
    storage.set_item("bookmarks:linkstack", "a").unwrap();
    storage.set_item("bookmarks:thinkstack", "b").unwrap();
    assert_eq!(storage.get_item("bookmarks:linkstack").unwrap().as_deref(), Some("a"));
    assert_eq!(storage.get_item("bookmarks:thinkstack").unwrap().as_deref(), Some("b"));
}

#[rstest]
#[case::memory(memory())]
#[case::sqlite(sqlite())]
fn test_remove_item(#[case] storage: Box<dyn LocalStorage>) {
    storage.set_item("k", "v").unwrap();
    storage.remove_item("k").unwrap();
    assert_eq!(storage.get_item("k").unwrap(), None);
    // Removing an absent key is not an error.
    storage.remove_item("k").unwrap();
}

#[test]
fn test_sqlite_storage_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.db");

    {
        let storage = SqliteStorage::new(Database::open(&path).unwrap());
        storage.set_item("bookmarks:linkstack", r#"[{"url":"https://example.com"}]"#).unwrap();
    }

    let storage = SqliteStorage::new(Database::open(&path).unwrap());
    assert_eq!(
        storage.get_item("bookmarks:linkstack").unwrap().as_deref(),
        Some(r#"[{"url":"https://example.com"}]"#)
    );
}
