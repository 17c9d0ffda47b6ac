//! Client portal: the token-scoped side door into one request.
//!
//! A portal view exposes only the request's checklist and clarification
//! thread; nothing else in the system is reachable from a token.

use chrono::NaiveDate;

use complytrack_core::error::CoreError;
use complytrack_core::portal::resolve_token;
use complytrack_core::request::{self, Comment, DocumentRequest};
use complytrack_core::status::DocumentStatus;
use complytrack_core::types::Timestamp;

use crate::error::AppResult;
use crate::state::AppState;

/// One checklist row in the portal, with its submission state.
#[derive(Debug, Clone)]
pub struct PortalChecklistItem {
    pub id: String,
    pub name: String,
    pub submitted: bool,
    /// Review status of the submitted document, if one exists.
    pub status: Option<DocumentStatus>,
}

/// The client-facing view of a single request.
#[derive(Debug, Clone)]
pub struct PortalView {
    pub request_id: String,
    pub client_name: String,
    pub client_company: String,
    pub due_date: NaiveDate,
    pub checklist: Vec<PortalChecklistItem>,
    pub thread: Vec<Comment>,
}

/// Resolve a portal token and build the scoped view.
///
/// An unknown token is the "invalid or expired link" condition, returned
/// as a not-found error for the caller to surface.
pub fn open_portal(state: &mut AppState, token: &str) -> AppResult<PortalView> {
    let found = resolve_token(&state.requests, token)
        .ok_or_else(|| CoreError::not_found("portal link", token))?
        .clone();

    state.active_portal_request = Some(found.id.clone());
    Ok(build_view(state, &found))
}

/// Append a client comment to the request behind `token`.
///
/// Forces the request into `Clarification Needed` (the one automatic
/// status transition) and attributes the comment to the linked client.
pub fn add_portal_comment(
    state: &mut AppState,
    token: &str,
    text: &str,
    now: Timestamp,
) -> AppResult<PortalView> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation("Message text is required".to_string()).into());
    }
    let found = resolve_token(&state.requests, token)
        .ok_or_else(|| CoreError::not_found("portal link", token))?
        .clone();

    let author = state.client_name(&found.client_id);
    let updated = request::add_clarification_comment(&found, &author, text.trim(), now);
    super::requests::replace_request(state, updated.clone());
    Ok(build_view(state, &updated))
}

fn build_view(state: &AppState, request: &DocumentRequest) -> PortalView {
    let client = state.clients.iter().find(|c| c.id == request.client_id);

    // Portal checklist rows match submissions by document name, the same
    // key clients see on the request.
    let checklist = request
        .documents
        .iter()
        .map(|item| {
            let submitted = state
                .documents
                .iter()
                .find(|d| d.request_id == request.id && d.name == item.name);
            PortalChecklistItem {
                id: item.id.clone(),
                name: item.name.clone(),
                submitted: submitted.is_some(),
                status: submitted.map(|d| d.status),
            }
        })
        .collect();

    PortalView {
        request_id: request.id.clone(),
        client_name: client.map(|c| c.name.clone()).unwrap_or_else(|| {
            crate::state::UNKNOWN_NAME.to_string()
        }),
        client_company: client
            .map(|c| c.company.clone())
            .unwrap_or_else(|| crate::state::UNKNOWN_NAME.to_string()),
        due_date: request.due_date,
        checklist,
        thread: request.clarification_thread.clone(),
    }
}
