//! Integration tests for the file-backed store: round trips, default
//! fallback, and corrupt-snapshot recovery.

use chrono::NaiveDate;

use complytrack_core::roles::UserRole;
use complytrack_core::status::DocumentStatus;
use complytrack_core::user::User;
use complytrack_store::{seed, JsonFileBackend, Store};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 18).unwrap()
}

fn file_store(dir: &tempfile::TempDir) -> Store {
    Store::new(Box::new(JsonFileBackend::open(dir.path()).unwrap()))
}

#[test]
fn missing_key_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);

    let users = store.load_users(seed::default_users);
    assert_eq!(users.len(), 4);
    assert_eq!(users[0].name, "Sanjay Sharma");
}

#[test]
fn collections_round_trip_across_store_instances() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = file_store(&dir);
        let mut requests = store.load_requests(seed::default_requests);
        requests[0].status = DocumentStatus::Approved;
        store.save_requests(&requests);

        let documents = store.load_documents(|| seed::default_documents(today()));
        store.save_documents(&documents);
    }

    // A fresh store over the same directory sees the persisted state, not
    // the defaults.
    let store = file_store(&dir);
    let requests = store.load_requests(Vec::new);
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].status, DocumentStatus::Approved);

    let documents = store.load_documents(Vec::new);
    assert_eq!(documents.len(), 6);
    let approved = documents.iter().find(|d| d.id == "doc1").unwrap();
    assert_eq!(approved.version_history.len(), 3);
    assert_eq!(approved.version_history[2].status, DocumentStatus::Approved);
}

#[test]
fn persisted_enums_use_original_wire_strings() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);

    let documents = seed::default_documents(today());
    store.save_documents(&documents);

    let raw = std::fs::read_to_string(dir.path().join("documents.json")).unwrap();
    assert!(raw.contains(r#""Under Review""#));
    assert!(raw.contains(r#""ID Proof""#));
    assert!(raw.contains(r#""versionHistory""#));
    assert!(raw.contains(r#""clientId""#));
}

#[test]
fn corrupt_snapshot_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("clients.json"), "{not json").unwrap();

    let store = file_store(&dir);
    let clients = store.load_clients(seed::default_clients);
    assert_eq!(clients.len(), 4);
}

#[test]
fn corrupt_snapshot_of_wrong_shape_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("templates.json"), r#"{"totally": "wrong"}"#).unwrap();

    let store = file_store(&dir);
    let templates = store.load_templates(seed::default_templates);
    assert_eq!(templates.len(), 4);
}

#[test]
fn current_user_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);

    assert!(store.load_current_user().is_none());

    let user = User {
        id: "user3".to_string(),
        name: "Amit Kumar".to_string(),
        role: UserRole::Staff,
        client_id: None,
    };
    store.save_current_user(&user);

    let loaded = store.load_current_user().unwrap();
    assert_eq!(loaded.id, "user3");
    assert_eq!(loaded.role, UserRole::Staff);
}

#[test]
fn saved_views_default_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);
    assert!(store.load_saved_views().is_empty());
}
