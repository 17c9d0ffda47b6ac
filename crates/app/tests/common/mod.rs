//! Shared fixtures for service integration tests.

use chrono::{NaiveDate, TimeZone, Utc};

use complytrack_app::config::AppConfig;
use complytrack_app::session::Session;
use complytrack_app::state::AppState;
use complytrack_core::types::Timestamp;
use complytrack_store::{MemoryBackend, Store};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 18).unwrap()
}

pub fn now() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 6, 18, 12, 0, 0).unwrap()
}

pub fn test_config() -> AppConfig {
    AppConfig {
        data_dir: ".".into(),
        seed_demo_data: true,
        portal_origin: "https://portal.example.com".to_string(),
    }
}

/// A fully seeded in-memory application state.
pub fn seeded_state() -> AppState {
    let store = Store::new(Box::new(MemoryBackend::new()));
    AppState::load(store, &test_config(), today())
}

fn session_for(state: &AppState, user_id: &str) -> Session {
    let user = state
        .users
        .iter()
        .find(|u| u.id == user_id)
        .cloned()
        .expect("seeded user exists");
    Session::new(user)
}

pub fn admin_session(state: &AppState) -> Session {
    session_for(state, "user1")
}

pub fn staff_session(state: &AppState) -> Session {
    session_for(state, "user3")
}

pub fn client_session(state: &AppState) -> Session {
    session_for(state, "user4")
}
