//! Document request operations: creation from a template, explicit status
//! changes, reminders, and portal-link formatting.

use std::collections::HashSet;

use chrono::NaiveDate;

use complytrack_core::error::CoreError;
use complytrack_core::portal;
use complytrack_core::request::{self, DocumentRequest};
use complytrack_core::status::DocumentStatus;
use complytrack_core::template;

use crate::error::AppResult;
use crate::reminder::{Notification, ReminderSink};
use crate::state::AppState;

/// Form input for a new request.
#[derive(Debug, Clone)]
pub struct NewRequest {
    pub client_id: String,
    pub template_id: String,
    /// Explicit due date; when absent, the template's due-date rule applies.
    pub due_date: Option<NaiveDate>,
}

/// Create a request by stamping out a template for one client.
pub fn create_request(
    state: &mut AppState,
    input: NewRequest,
    today: NaiveDate,
) -> AppResult<DocumentRequest> {
    if input.client_id.trim().is_empty() || input.template_id.trim().is_empty() {
        return Err(CoreError::Validation(
            "Client and compliance template are both required".to_string(),
        )
        .into());
    }
    if !state.clients.iter().any(|c| c.id == input.client_id) {
        return Err(CoreError::not_found("client", input.client_id).into());
    }
    let selected = state
        .templates
        .iter()
        .find(|t| t.id == input.template_id)
        .cloned()
        .ok_or_else(|| CoreError::not_found("template", input.template_id.clone()))?;

    let due_date = input
        .due_date
        .unwrap_or_else(|| template::due_date_from_rule(selected.due_date_rule, today));

    let existing_tokens: HashSet<String> = state
        .requests
        .iter()
        .map(|r| r.portal_token.clone())
        .collect();

    let created = template::instantiate_request(
        &selected,
        &input.client_id,
        due_date,
        today,
        &existing_tokens,
    );
    // Newest first, matching the request list ordering.
    state.requests.insert(0, created.clone());
    state.persist_requests();
    Ok(created)
}

/// Delete a request. Submitted documents keep their (now dangling)
/// request reference and stay visible.
pub fn delete_request(state: &mut AppState, request_id: &str) -> AppResult<()> {
    if !state.requests.iter().any(|r| r.id == request_id) {
        return Err(CoreError::not_found("request", request_id).into());
    }
    state.requests.retain(|r| r.id != request_id);
    if state.active_portal_request.as_deref() == Some(request_id) {
        state.active_portal_request = None;
    }
    state.persist_requests();
    Ok(())
}

/// Explicitly set a request's status. Staff action, any transition allowed.
pub fn set_request_status(
    state: &mut AppState,
    request_id: &str,
    new_status: DocumentStatus,
) -> AppResult<DocumentRequest> {
    let current = state
        .requests
        .iter()
        .find(|r| r.id == request_id)
        .cloned()
        .ok_or_else(|| CoreError::not_found("request", request_id))?;

    let updated = request::set_status(&current, new_status);
    replace_request(state, updated.clone());
    Ok(updated)
}

/// Dispatch a reminder for a request through the configured sink.
///
/// Delivery itself is out of scope; the outcome is reported back as a
/// transient notification either way.
pub fn send_reminder(
    state: &AppState,
    sink: &dyn ReminderSink,
    request_id: &str,
) -> AppResult<Notification> {
    if !state.requests.iter().any(|r| r.id == request_id) {
        return Err(CoreError::not_found("request", request_id).into());
    }
    let notification = match sink.send_reminder(request_id) {
        Ok(()) => Notification::success("Reminder sent successfully!"),
        Err(e) => {
            tracing::warn!(request_id, error = %e, "Reminder dispatch failed");
            Notification::error("Failed to send reminder. Please try again.")
        }
    };
    Ok(notification)
}

/// The shareable portal link for a request.
pub fn portal_link(state: &AppState, origin: &str, request_id: &str) -> AppResult<String> {
    let found = state
        .requests
        .iter()
        .find(|r| r.id == request_id)
        .ok_or_else(|| CoreError::not_found("request", request_id))?;
    Ok(portal::portal_link(origin, &found.portal_token))
}

pub(crate) fn replace_request(state: &mut AppState, updated: DocumentRequest) {
    if let Some(slot) = state.requests.iter_mut().find(|r| r.id == updated.id) {
        *slot = updated;
    }
    state.persist_requests();
}
