//! Live application state: the five entity collections plus ephemeral UI
//! selections, backed by the store.
//!
//! Collections are loaded once at startup; every mutating service persists
//! the collection it touched. Persistence is fire-and-forget (logged on
//! failure), so the in-memory state is authoritative for the session.

use chrono::NaiveDate;

use complytrack_core::client::Client;
use complytrack_core::document::Document;
use complytrack_core::request::DocumentRequest;
use complytrack_core::saved_view::SavedView;
use complytrack_core::template::ComplianceTemplate;
use complytrack_core::types::EntityId;
use complytrack_core::user::User;
use complytrack_core::visibility::{filter_for_role, VisibleData};
use complytrack_store::{seed, JsonFileBackend, Store};

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::session::Session;

/// Name shown when a referenced entity no longer resolves.
///
/// References are weak; display logic tolerates dangling ids rather than
/// failing.
pub const UNKNOWN_NAME: &str = "Unknown";

pub struct AppState {
    pub users: Vec<User>,
    pub clients: Vec<Client>,
    pub templates: Vec<ComplianceTemplate>,
    pub documents: Vec<Document>,
    pub requests: Vec<DocumentRequest>,
    pub saved_views: Vec<SavedView>,

    /// Client currently opened in the per-client dashboard, if any.
    pub selected_client: Option<EntityId>,
    /// Request currently opened through a portal link, if any.
    pub active_portal_request: Option<EntityId>,

    store: Store,
}

impl AppState {
    /// Open the file-backed store at the configured data directory and load
    /// all collections from it.
    pub fn open(config: &AppConfig, today: NaiveDate) -> AppResult<Self> {
        let backend = JsonFileBackend::open(&config.data_dir)?;
        Ok(Self::load(Store::new(Box::new(backend)), config, today))
    }

    /// Load all collections from the store.
    ///
    /// A collection that has never been persisted starts from the demo
    /// dataset when `config.seed_demo_data` is set, empty otherwise.
    pub fn load(store: Store, config: &AppConfig, today: NaiveDate) -> Self {
        let seed_demo = config.seed_demo_data;
        let users = store.load_users(|| {
            if seed_demo {
                seed::default_users()
            } else {
                Vec::new()
            }
        });
        let clients = store.load_clients(|| {
            if seed_demo {
                seed::default_clients()
            } else {
                Vec::new()
            }
        });
        let templates = store.load_templates(|| {
            if seed_demo {
                seed::default_templates()
            } else {
                Vec::new()
            }
        });
        let documents = store.load_documents(|| {
            if seed_demo {
                seed::default_documents(today)
            } else {
                Vec::new()
            }
        });
        let requests = store.load_requests(|| {
            if seed_demo {
                seed::default_requests()
            } else {
                Vec::new()
            }
        });
        let saved_views = store.load_saved_views();

        Self {
            users,
            clients,
            templates,
            documents,
            requests,
            saved_views,
            selected_client: None,
            active_portal_request: None,
            store,
        }
    }

    /// The session's view of the role-scoped collections.
    ///
    /// Reapplied on every access so a user switch immediately changes what
    /// is visible.
    pub fn visible(&self, session: &Session) -> VisibleData {
        filter_for_role(
            session.role(),
            session.client_id(),
            VisibleData {
                clients: self.clients.clone(),
                documents: self.documents.clone(),
                requests: self.requests.clone(),
            },
        )
    }

    /// Resolve a client name, tolerating dangling references.
    pub fn client_name(&self, client_id: &str) -> String {
        self.clients
            .iter()
            .find(|c| c.id == client_id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string())
    }

    /// Resolve a template name, tolerating dangling references.
    pub fn template_name(&self, template_id: &str) -> String {
        self.templates
            .iter()
            .find(|t| t.id == template_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string())
    }

    // -- Persistence hooks --------------------------------------------------

    pub fn persist_users(&self) {
        self.store.save_users(&self.users);
    }

    pub fn persist_clients(&self) {
        self.store.save_clients(&self.clients);
    }

    pub fn persist_templates(&self) {
        self.store.save_templates(&self.templates);
    }

    pub fn persist_documents(&self) {
        self.store.save_documents(&self.documents);
    }

    pub fn persist_requests(&self) {
        self.store.save_requests(&self.requests);
    }

    pub fn persist_saved_views(&self) {
        self.store.save_saved_views(&self.saved_views);
    }

    pub fn persist_current_user(&self, user: &User) {
        self.store.save_current_user(user);
    }

    /// The persisted active user from the previous session, if any.
    pub fn stored_current_user(&self) -> Option<User> {
        self.store.load_current_user()
    }
}
