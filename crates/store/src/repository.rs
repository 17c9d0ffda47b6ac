//! Typed load/save repository over a [`StorageBackend`].
//!
//! Load happens once at session start; a missing key or unparseable
//! snapshot falls back to the supplied default with the error logged.
//! Saves run after every in-memory change and never fail the caller.

use serde::de::DeserializeOwned;
use serde::Serialize;

use complytrack_core::client::Client;
use complytrack_core::document::Document;
use complytrack_core::request::DocumentRequest;
use complytrack_core::saved_view::SavedView;
use complytrack_core::template::ComplianceTemplate;
use complytrack_core::user::User;

use crate::backend::StorageBackend;
use crate::keys;

/// Provides typed access to the persisted collections.
pub struct Store {
    backend: Box<dyn StorageBackend>,
}

impl Store {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    // -- Collections --------------------------------------------------------

    pub fn load_users(&self, default: impl FnOnce() -> Vec<User>) -> Vec<User> {
        self.load_collection(keys::USERS, default)
    }

    pub fn save_users(&self, users: &[User]) {
        self.save_collection(keys::USERS, users);
    }

    pub fn load_clients(&self, default: impl FnOnce() -> Vec<Client>) -> Vec<Client> {
        self.load_collection(keys::CLIENTS, default)
    }

    pub fn save_clients(&self, clients: &[Client]) {
        self.save_collection(keys::CLIENTS, clients);
    }

    pub fn load_templates(
        &self,
        default: impl FnOnce() -> Vec<ComplianceTemplate>,
    ) -> Vec<ComplianceTemplate> {
        self.load_collection(keys::TEMPLATES, default)
    }

    pub fn save_templates(&self, templates: &[ComplianceTemplate]) {
        self.save_collection(keys::TEMPLATES, templates);
    }

    pub fn load_documents(&self, default: impl FnOnce() -> Vec<Document>) -> Vec<Document> {
        self.load_collection(keys::DOCUMENTS, default)
    }

    pub fn save_documents(&self, documents: &[Document]) {
        self.save_collection(keys::DOCUMENTS, documents);
    }

    pub fn load_requests(
        &self,
        default: impl FnOnce() -> Vec<DocumentRequest>,
    ) -> Vec<DocumentRequest> {
        self.load_collection(keys::REQUESTS, default)
    }

    pub fn save_requests(&self, requests: &[DocumentRequest]) {
        self.save_collection(keys::REQUESTS, requests);
    }

    pub fn load_saved_views(&self) -> Vec<SavedView> {
        self.load_collection(keys::SAVED_VIEWS, Vec::new)
    }

    pub fn save_saved_views(&self, views: &[SavedView]) {
        self.save_collection(keys::SAVED_VIEWS, views);
    }

    // -- Current user (single value, not a collection) ----------------------

    pub fn load_current_user(&self) -> Option<User> {
        self.load_value(keys::CURRENT_USER)
    }

    pub fn save_current_user(&self, user: &User) {
        self.save_value(keys::CURRENT_USER, user);
    }

    // -- Generic helpers ----------------------------------------------------

    fn load_collection<T, F>(&self, key: &str, default: F) -> Vec<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        match self.backend.load(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(e) => {
                    tracing::error!(key, error = %e, "Stored snapshot is unreadable, using defaults");
                    default()
                }
            },
            Ok(None) => default(),
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to read stored snapshot, using defaults");
                default()
            }
        }
    }

    fn save_collection<T: Serialize>(&self, key: &str, items: &[T]) {
        match serde_json::to_string(items) {
            Ok(raw) => {
                if let Err(e) = self.backend.save(key, &raw) {
                    tracing::error!(key, error = %e, "Failed to persist snapshot, in-memory state remains authoritative");
                }
            }
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to serialize snapshot");
            }
        }
    }

    fn load_value<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.backend.load(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::error!(key, error = %e, "Stored value is unreadable");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to read stored value");
                None
            }
        }
    }

    fn save_value<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => {
                if let Err(e) = self.backend.save(key, &raw) {
                    tracing::error!(key, error = %e, "Failed to persist value, in-memory state remains authoritative");
                }
            }
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to serialize value");
            }
        }
    }
}
