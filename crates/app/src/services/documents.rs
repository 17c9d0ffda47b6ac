//! Document submission and review operations.

use chrono::NaiveDate;

use complytrack_core::document::{self, Document, DocumentVersion};
use complytrack_core::document_type::DocumentType;
use complytrack_core::error::CoreError;
use complytrack_core::status::DocumentStatus;
use complytrack_core::types::Timestamp;

use crate::error::AppResult;
use crate::session::Session;
use crate::state::AppState;

/// Default audit note when review begins.
pub const NOTE_REVIEW_STARTED: &str = "Review started.";

/// Default audit note on approval.
pub const NOTE_APPROVED: &str = "Document approved.";

/// Form input for a document submission against a request checklist.
#[derive(Debug, Clone)]
pub struct SubmitDocument {
    pub request_id: String,
    pub name: String,
    pub doc_type: DocumentType,
    pub expiry_date: Option<NaiveDate>,
}

/// Record a submitted document in `Received` status.
///
/// The client and compliance references come from the request, so the
/// document lands on the right client even when submitted through the
/// portal side door.
pub fn submit_document(
    state: &mut AppState,
    session: &Session,
    input: SubmitDocument,
    today: NaiveDate,
    now: Timestamp,
) -> AppResult<Document> {
    if input.name.trim().is_empty() {
        return Err(CoreError::Validation("Document name is required".to_string()).into());
    }
    let request = state
        .requests
        .iter()
        .find(|r| r.id == input.request_id)
        .ok_or_else(|| CoreError::not_found("request", input.request_id.clone()))?;

    let created = document::new_submission(
        input.name.trim(),
        &request.client_id,
        &request.compliance_id,
        &request.id,
        input.doc_type,
        input.expiry_date,
        &session.user.name,
        today,
        now,
    );
    state.documents.push(created.clone());
    state.persist_documents();
    Ok(created)
}

/// Apply a status transition to a document, recording the acting user.
pub fn transition_document(
    state: &mut AppState,
    session: &Session,
    document_id: &str,
    new_status: DocumentStatus,
    notes: &str,
    now: Timestamp,
) -> AppResult<Document> {
    let current = state
        .documents
        .iter()
        .find(|d| d.id == document_id)
        .cloned()
        .ok_or_else(|| CoreError::not_found("document", document_id))?;

    let client_name = state.client_name(&current.client_id);
    let updated = document::transition(
        &current,
        new_status,
        notes,
        &session.user.name,
        &client_name,
        now,
    );

    if let Some(slot) = state.documents.iter_mut().find(|d| d.id == document_id) {
        *slot = updated.clone();
    }
    state.persist_documents();
    Ok(updated)
}

/// Move a received document into review.
pub fn start_review(
    state: &mut AppState,
    session: &Session,
    document_id: &str,
    now: Timestamp,
) -> AppResult<Document> {
    transition_document(
        state,
        session,
        document_id,
        DocumentStatus::UnderReview,
        NOTE_REVIEW_STARTED,
        now,
    )
}

/// Approve a document, which also assigns its drive link.
pub fn approve_document(
    state: &mut AppState,
    session: &Session,
    document_id: &str,
    now: Timestamp,
) -> AppResult<Document> {
    transition_document(
        state,
        session,
        document_id,
        DocumentStatus::Approved,
        NOTE_APPROVED,
        now,
    )
}

/// Reject a document. A reason is mandatory and becomes both the audit
/// note and the stored rejection reason.
pub fn reject_document(
    state: &mut AppState,
    session: &Session,
    document_id: &str,
    reason: &str,
    now: Timestamp,
) -> AppResult<Document> {
    if reason.trim().is_empty() {
        return Err(CoreError::Validation("Rejection reason is required".to_string()).into());
    }
    transition_document(
        state,
        session,
        document_id,
        DocumentStatus::Rejected,
        reason,
        now,
    )
}

/// Read a document's audit trail.
pub fn version_history(state: &AppState, document_id: &str) -> AppResult<Vec<DocumentVersion>> {
    let found = state
        .documents
        .iter()
        .find(|d| d.id == document_id)
        .ok_or_else(|| CoreError::not_found("document", document_id))?;
    Ok(found.version_history.clone())
}
