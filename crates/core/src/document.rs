//! Document entity and its review lifecycle state machine.
//!
//! Every status change appends one immutable entry to the version history;
//! the history is the audit trail and the sole source of truth for "who did
//! what when". It is never reordered, truncated, or rewritten.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::document_type::DocumentType;
use crate::naming;
use crate::status::DocumentStatus;
use crate::types::{new_entity_id, EntityId, Timestamp};

/// One immutable audit entry in a document's status history.
///
/// Version numbers are strictly increasing integers starting at 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentVersion {
    pub version: u32,
    pub status: DocumentStatus,
    pub notes: String,
    pub updated_at: Timestamp,
    pub updated_by: String,
}

/// A single submitted artifact tied to one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: EntityId,
    pub name: String,
    pub client_id: EntityId,
    pub compliance_id: EntityId,
    pub request_id: EntityId,
    pub status: DocumentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_link: Option<String>,
    pub version_history: Vec<DocumentVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

/// Build a freshly submitted document in `Received` status.
///
/// The submission itself is version 1 of the audit trail.
#[allow(clippy::too_many_arguments)]
pub fn new_submission(
    name: &str,
    client_id: &str,
    compliance_id: &str,
    request_id: &str,
    doc_type: DocumentType,
    expiry_date: Option<NaiveDate>,
    submitted_by: &str,
    submitted_date: NaiveDate,
    now: Timestamp,
) -> Document {
    Document {
        id: new_entity_id("doc"),
        name: name.to_string(),
        client_id: client_id.to_string(),
        compliance_id: compliance_id.to_string(),
        request_id: request_id.to_string(),
        status: DocumentStatus::Received,
        submitted_date: Some(submitted_date),
        doc_type,
        expiry_date,
        drive_link: None,
        version_history: vec![DocumentVersion {
            version: 1,
            status: DocumentStatus::Received,
            notes: "Initial submission by client.".to_string(),
            updated_at: now,
            updated_by: submitted_by.to_string(),
        }],
        rejection_reason: None,
    }
}

/// Apply a status transition to a document.
///
/// 1. Appends a version entry (`version = len + 1`) recording the new
///    status, the notes, and the acting user.
/// 2. Sets the document status.
/// 3. On `Approved`, sets the deterministic drive link for
///    (`client_name`, `request_id`, document name).
/// 4. On `Rejected`, records `notes` as the rejection reason.
///
/// No transition is rejected based on the current status; the lifecycle is
/// deliberately permissive and rejected documents may loop back through
/// `Received` on resubmission. A rejection reason left over from an earlier
/// rejection stays in place if the document is later re-approved.
pub fn transition(
    document: &Document,
    new_status: DocumentStatus,
    notes: &str,
    actor: &str,
    client_name: &str,
    now: Timestamp,
) -> Document {
    let mut updated = document.clone();
    updated.version_history.push(DocumentVersion {
        version: document.version_history.len() as u32 + 1,
        status: new_status,
        notes: notes.to_string(),
        updated_at: now,
        updated_by: actor.to_string(),
    });
    updated.status = new_status;

    if new_status == DocumentStatus::Approved {
        updated.drive_link = Some(naming::drive_link_for(
            client_name,
            &document.request_id,
            &document.name,
        ));
    }
    if new_status == DocumentStatus::Rejected {
        updated.rejection_reason = Some(notes.to_string());
    }

    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 6, 18, 9, 0, 0).unwrap()
    }

    fn submitted_doc() -> Document {
        new_submission(
            "Sales Ledger",
            "cli1",
            "com-gst",
            "req3",
            DocumentType::Gst,
            None,
            "John Doe",
            NaiveDate::from_ymd_opt(2024, 6, 18).unwrap(),
            now(),
        )
    }

    #[test]
    fn submission_starts_at_version_one_received() {
        let doc = submitted_doc();
        assert_eq!(doc.status, DocumentStatus::Received);
        assert_eq!(doc.version_history.len(), 1);
        assert_eq!(doc.version_history[0].version, 1);
        assert_eq!(doc.version_history[0].status, DocumentStatus::Received);
        assert!(doc.drive_link.is_none());
        assert!(doc.rejection_reason.is_none());
    }

    #[test]
    fn each_transition_appends_exactly_one_version() {
        let mut doc = submitted_doc();
        for (i, status) in [
            DocumentStatus::UnderReview,
            DocumentStatus::ClarificationNeeded,
            DocumentStatus::UnderReview,
            DocumentStatus::Approved,
        ]
        .iter()
        .enumerate()
        {
            doc = transition(&doc, *status, "note", "Amit Kumar", "Innovate Inc.", now());
            assert_eq!(doc.version_history.len(), i + 2);
        }
    }

    #[test]
    fn version_numbers_are_strictly_sequential() {
        let mut doc = submitted_doc();
        doc = transition(
            &doc,
            DocumentStatus::UnderReview,
            "Review started.",
            "Amit Kumar",
            "Innovate Inc.",
            now(),
        );
        doc = transition(
            &doc,
            DocumentStatus::Approved,
            "Looks good.",
            "Priya Patel",
            "Innovate Inc.",
            now(),
        );
        for (i, entry) in doc.version_history.iter().enumerate() {
            assert_eq!(entry.version, i as u32 + 1);
        }
    }

    #[test]
    fn history_is_append_only() {
        let doc = submitted_doc();
        let first = doc.version_history[0].clone();
        let updated = transition(
            &doc,
            DocumentStatus::UnderReview,
            "Review started.",
            "Amit Kumar",
            "Innovate Inc.",
            now(),
        );
        assert_eq!(updated.version_history[0].version, first.version);
        assert_eq!(updated.version_history[0].notes, first.notes);
        assert_eq!(updated.version_history[0].status, first.status);
    }

    #[test]
    fn approval_sets_deterministic_drive_link() {
        let doc = submitted_doc();
        let approved = transition(
            &doc,
            DocumentStatus::Approved,
            "Looks good.",
            "Priya Patel",
            "Innovate Inc.",
            now(),
        );
        assert_eq!(
            approved.drive_link.as_deref(),
            Some("https://drive.google.com/d/Innovate_Inc./req3/Sales_Ledger")
        );
    }

    #[test]
    fn rejection_records_notes_as_reason() {
        let doc = submitted_doc();
        let rejected = transition(
            &doc,
            DocumentStatus::Rejected,
            "Bill is older than 3 months.",
            "Amit Kumar",
            "Innovate Inc.",
            now(),
        );
        assert_eq!(rejected.status, DocumentStatus::Rejected);
        assert_eq!(
            rejected.rejection_reason.as_deref(),
            Some("Bill is older than 3 months.")
        );
    }

    #[test]
    fn reapproval_keeps_stale_rejection_reason() {
        let doc = submitted_doc();
        let rejected = transition(
            &doc,
            DocumentStatus::Rejected,
            "Blurry scan.",
            "Amit Kumar",
            "Innovate Inc.",
            now(),
        );
        let reapproved = transition(
            &rejected,
            DocumentStatus::Approved,
            "Resubmission accepted.",
            "Priya Patel",
            "Innovate Inc.",
            now(),
        );
        assert_eq!(reapproved.status, DocumentStatus::Approved);
        assert_eq!(reapproved.rejection_reason.as_deref(), Some("Blurry scan."));
        assert!(reapproved.drive_link.is_some());
    }

    #[test]
    fn any_status_is_reachable_from_any_status() {
        let doc = submitted_doc();
        let approved = transition(
            &doc,
            DocumentStatus::Approved,
            "fast-tracked",
            "Priya Patel",
            "Innovate Inc.",
            now(),
        );
        // Looping back from a terminal status is allowed.
        let reopened = transition(
            &approved,
            DocumentStatus::Received,
            "Resubmitted.",
            "John Doe",
            "Innovate Inc.",
            now(),
        );
        assert_eq!(reopened.status, DocumentStatus::Received);
        assert_eq!(reopened.version_history.len(), 3);
    }

    #[test]
    fn transition_does_not_mutate_input() {
        let doc = submitted_doc();
        let _ = transition(
            &doc,
            DocumentStatus::Approved,
            "ok",
            "Priya Patel",
            "Innovate Inc.",
            now(),
        );
        assert_eq!(doc.status, DocumentStatus::Received);
        assert_eq!(doc.version_history.len(), 1);
        assert!(doc.drive_link.is_none());
    }
}
