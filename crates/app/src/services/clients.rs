//! Client directory operations.

use chrono::NaiveDate;

use complytrack_core::client::{validate_client, Client};
use complytrack_core::error::CoreError;

use crate::error::AppResult;
use crate::session::Session;
use crate::state::AppState;

/// Form input for a new client.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub company: String,
    pub email: String,
}

/// Add a client. Admin only; all fields required.
pub fn add_client(
    state: &mut AppState,
    session: &Session,
    input: NewClient,
    today: NaiveDate,
) -> AppResult<Client> {
    session.require_admin()?;
    validate_client(&input.name, &input.company, &input.email)?;

    let client = Client::new(input.name, input.company, input.email, today);
    // Newest first, matching the directory ordering.
    state.clients.insert(0, client.clone());
    state.persist_clients();
    Ok(client)
}

/// Delete a client and everything that belongs to it.
///
/// The store holds only weak references, so the cascade to the client's
/// documents and requests is enforced here, not by the store.
pub fn delete_client(state: &mut AppState, client_id: &str) -> AppResult<()> {
    if !state.clients.iter().any(|c| c.id == client_id) {
        return Err(CoreError::not_found("client", client_id).into());
    }

    state.clients.retain(|c| c.id != client_id);
    state.documents.retain(|d| d.client_id != client_id);
    state.requests.retain(|r| r.client_id != client_id);
    if state.selected_client.as_deref() == Some(client_id) {
        state.selected_client = None;
    }

    state.persist_clients();
    state.persist_documents();
    state.persist_requests();
    Ok(())
}

/// Open a client's dashboard: records the selection and returns the client.
pub fn select_client(state: &mut AppState, client_id: &str) -> AppResult<Client> {
    let client = state
        .clients
        .iter()
        .find(|c| c.id == client_id)
        .cloned()
        .ok_or_else(|| CoreError::not_found("client", client_id))?;
    state.selected_client = Some(client.id.clone());
    Ok(client)
}
