//! Session persistence tests against the file-backed storage

use std::fs;
use std::sync::Arc;

use luminalib::auth::{Role, Session, SessionStore};
use luminalib::storage::{FileStorage, Storage};

fn file_store(dir: &tempfile::TempDir) -> (SessionStore, Arc<FileStorage>) {
    let storage = Arc::new(FileStorage::new(dir.path().join("session.json")));
    (SessionStore::new(storage.clone()), storage)
}

#[test]
fn test_restore_returns_what_was_saved() {
    let dir = tempfile::tempdir().unwrap();
    let (store, _) = file_store(&dir);

    for session in [
        Session::new("t1", "admin", Role::Admin),
        Session::new("eyJhbGciOi.payload.sig", "jane_smith", Role::Member),
        Session::new("tok", "名前", Role::Member),
    ] {
        store.save(&session).unwrap();
        assert_eq!(store.restore(), Some(session));
    }
}

#[test]
fn test_restore_after_clear_is_absent() {
    let dir = tempfile::tempdir().unwrap();
    let (store, storage) = file_store(&dir);

    store.save(&Session::new("t1", "admin", Role::Admin)).unwrap();
    store.clear().unwrap();

    assert!(store.restore().is_none());
    assert!(storage.get("token").is_none());
    assert!(storage.get("role").is_none());
    assert!(storage.get("username").is_none());
}

#[test]
fn test_saved_session_survives_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let (store, _) = file_store(&dir);
        store.save(&Session::new("t9", "bob_wilson", Role::Member)).unwrap();
    }

    let (reopened, _) = file_store(&dir);
    let session = reopened.restore().expect("session");
    assert_eq!(session.username, "bob_wilson");
    assert_eq!(session.role, Role::Member);
}

#[test]
fn test_no_storage_file_restores_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (store, _) = file_store(&dir);
    assert!(store.restore().is_none());
}

#[test]
fn test_hand_edited_partial_file_restores_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("session.json"),
        r#"{"token": "t1", "username": "admin"}"#,
    )
    .unwrap();

    let (store, _) = file_store(&dir);
    assert!(store.restore().is_none());
}

#[test]
fn test_clear_leaves_unrelated_keys() {
    let dir = tempfile::tempdir().unwrap();
    let (store, storage) = file_store(&dir);
    storage.set("theme", "dark").unwrap();

    store.save(&Session::new("t1", "admin", Role::Admin)).unwrap();
    store.clear().unwrap();

    assert_eq!(storage.get("theme").as_deref(), Some("dark"));
}
