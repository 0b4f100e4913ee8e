use vidchat::{DisplayMode, Message, SessionStore};

use super::*;

#[test]
fn missing_key_reads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let backend = DirBackend::new(dir.path().join("never-created"));
    assert_eq!(backend.get("anything").unwrap(), None);
}

#[test]
fn set_creates_directory_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let mut backend = DirBackend::new(dir.path().join("data"));
    backend.set("vidchat_session_abc", "[]").unwrap();
    assert_eq!(backend.get("vidchat_session_abc").unwrap().as_deref(), Some("[]"));
    assert!(backend.root().join("vidchat_session_abc.json").exists());
}

#[test]
fn remove_missing_key_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let mut backend = DirBackend::new(dir.path());
    backend.remove("ghost").unwrap();
}

#[test]
fn hostile_keys_stay_inside_root() {
    let dir = tempfile::tempdir().unwrap();
    let backend = DirBackend::new(dir.path());
    let path = backend.path_for("../../etc/passwd");
    assert_eq!(path.parent(), Some(dir.path()));
}

#[test]
fn session_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SessionStore::new(DirBackend::new(dir.path()));
    store.save("ABC123", &[Message::user("q"), Message::bot("a")]).unwrap();
    store.set_preference(DisplayMode::Dark).unwrap();

    let reopened = SessionStore::new(DirBackend::new(dir.path()));
    assert_eq!(reopened.load("ABC123").unwrap().len(), 2);
    assert_eq!(reopened.preference(), DisplayMode::Dark);
}
