use std::fs;
use std::sync::Arc;

use codeit_storage::{FileStorage, KeyValueStorage, SessionStore};
use codeit_types::{ConversationTurn, Role, SessionId, HISTORY_KEY, SESSION_KEY};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn sample_history() -> Vec<ConversationTurn> {
    vec![
        ConversationTurn::new(Role::User, "When does the Python course start?", "2024-03-01T08:00:00.000Z"),
        ConversationTurn::new(Role::Assistant, "The next batch starts on Sunday.", "2024-03-01T08:00:02.000Z"),
    ]
}

#[test]
fn test_history_survives_reopen() {
    let tmp = TempDir::new().unwrap();

    {
        let store = SessionStore::new(Arc::new(FileStorage::open(tmp.path()).unwrap()));
        store
            .save_snapshot(&SessionId::from("session-1"), &sample_history())
            .unwrap();
    }

    let reopened = SessionStore::new(Arc::new(FileStorage::open(tmp.path()).unwrap()));
    assert_eq!(reopened.load_session_id(), SessionId::from("session-1"));
    assert_eq!(reopened.load_history(), sample_history());
}

#[test]
fn test_values_are_plain_json_files() {
    let tmp = TempDir::new().unwrap();
    let store = SessionStore::new(Arc::new(FileStorage::open(tmp.path()).unwrap()));

    store.save_session_id(&SessionId::NoSession).unwrap();
    store.save_history(&Vec::new()).unwrap();

    let session_raw = fs::read_to_string(tmp.path().join(format!("{}.json", SESSION_KEY))).unwrap();
    let history_raw = fs::read_to_string(tmp.path().join(format!("{}.json", HISTORY_KEY))).unwrap();
    assert_eq!(session_raw, "null");
    assert_eq!(history_raw, "[]");
}

#[test]
fn test_hand_edited_garbage_falls_back() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(format!("{}.json", HISTORY_KEY)), "[{\"role\":").unwrap();

    let store = SessionStore::new(Arc::new(FileStorage::open(tmp.path()).unwrap()));
    assert!(store.load_history().is_empty());
}

#[test]
fn test_remove_and_clear() {
    let tmp = TempDir::new().unwrap();
    let storage = FileStorage::open(tmp.path()).unwrap();

    storage.set("one", "1").unwrap();
    storage.set("two", "2").unwrap();
    storage.remove("one").unwrap();
    storage.remove("missing").unwrap();

    assert_eq!(storage.get("one").unwrap(), None);
    assert_eq!(storage.get("two").unwrap().as_deref(), Some("2"));

    storage.clear().unwrap();
    assert_eq!(storage.get("two").unwrap(), None);
}
