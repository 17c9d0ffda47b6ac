//! Role-scoped data visibility.
//!
//! Applied before any display: a `Client`-role user sees only the records
//! linked to their client id; every other role sees everything. Must be
//! reapplied whenever the active user changes.

use crate::client::Client;
use crate::document::Document;
use crate::request::DocumentRequest;
use crate::roles::UserRole;

/// The three collections subject to role scoping.
#[derive(Debug, Clone, Default)]
pub struct VisibleData {
    pub clients: Vec<Client>,
    pub documents: Vec<Document>,
    pub requests: Vec<DocumentRequest>,
}

/// Narrow the collections to what `role` may see.
///
/// For `Client`, everything is filtered to `client_id`. A missing client
/// link, or a link matching no client record, yields empty collections
/// across the board, which is a valid "client has no linked record" state,
/// not an error. All other roles pass through unchanged. Pure.
pub fn filter_for_role(role: UserRole, client_id: Option<&str>, data: VisibleData) -> VisibleData {
    if !role.is_client() {
        return data;
    }
    let Some(client_id) = client_id else {
        return VisibleData::default();
    };

    let clients: Vec<Client> = data
        .clients
        .into_iter()
        .filter(|c| c.id == client_id)
        .collect();
    if clients.is_empty() {
        return VisibleData::default();
    }

    VisibleData {
        clients,
        documents: data
            .documents
            .into_iter()
            .filter(|d| d.client_id == client_id)
            .collect(),
        requests: data
            .requests
            .into_iter()
            .filter(|r| r.client_id == client_id)
            .collect(),
    }
}
