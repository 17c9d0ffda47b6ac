//! Document request entity and its lifecycle operations.
//!
//! A request's status is set explicitly by staff; the single automatic
//! transition is the clarification flow, which forces the status to
//! `Clarification Needed` whenever a comment lands on the thread.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::DocumentStatus;
use crate::types::{new_entity_id, EntityId, Timestamp};

/// One entry in a request's checklist: a point-in-time copy of a template
/// required-document, with its own request-scoped id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestedDocument {
    pub id: EntityId,
    pub name: String,
}

/// One message on a request's clarification thread. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: EntityId,
    pub author: String,
    pub text: String,
    pub timestamp: Timestamp,
}

/// A concrete, per-client instantiation of a compliance template.
///
/// `portal_token` is a bearer credential: globally unique, immutable after
/// creation, and the only key a client needs to reach this request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    pub id: EntityId,
    pub client_id: EntityId,
    pub compliance_id: EntityId,
    pub documents: Vec<RequestedDocument>,
    pub status: DocumentStatus,
    pub request_date: NaiveDate,
    pub due_date: NaiveDate,
    pub portal_token: String,
    pub clarification_thread: Vec<Comment>,
}

/// Append a comment and force the status to `Clarification Needed`.
///
/// This is how a client signals "I have a question" and is the only
/// automatic status transition in the system; it applies regardless of the
/// request's prior status, including `Approved`.
pub fn add_clarification_comment(
    request: &DocumentRequest,
    author: &str,
    text: &str,
    now: Timestamp,
) -> DocumentRequest {
    let mut updated = request.clone();
    updated.clarification_thread.push(Comment {
        id: new_entity_id("cmt"),
        author: author.to_string(),
        text: text.to_string(),
        timestamp: now,
    });
    updated.status = DocumentStatus::ClarificationNeeded;
    updated
}

/// Set the request status explicitly.
///
/// Staff action; no prior-state validation, any status may follow any other.
pub fn set_status(request: &DocumentRequest, new_status: DocumentStatus) -> DocumentRequest {
    let mut updated = request.clone();
    updated.status = new_status;
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_request(status: DocumentStatus) -> DocumentRequest {
        DocumentRequest {
            id: "req1".to_string(),
            client_id: "cli1".to_string(),
            compliance_id: "com-gst".to_string(),
            documents: vec![RequestedDocument {
                id: "reqdoc-1".to_string(),
                name: "Sales Ledger".to_string(),
            }],
            status,
            request_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            portal_token: "tok".to_string(),
            clarification_thread: Vec::new(),
        }
    }

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 6, 18, 10, 30, 0).unwrap()
    }

    #[test]
    fn comment_forces_clarification_needed() {
        let request = sample_request(DocumentStatus::Pending);
        let updated = add_clarification_comment(&request, "John Doe", "Where do I upload?", now());
        assert_eq!(updated.status, DocumentStatus::ClarificationNeeded);
        assert_eq!(updated.clarification_thread.len(), 1);
        assert_eq!(updated.clarification_thread[0].author, "John Doe");
    }

    #[test]
    fn comment_overrides_approved_status() {
        let request = sample_request(DocumentStatus::Approved);
        let updated = add_clarification_comment(&request, "John Doe", "One more question", now());
        assert_eq!(updated.status, DocumentStatus::ClarificationNeeded);
    }

    #[test]
    fn comments_append_in_order() {
        let request = sample_request(DocumentStatus::Pending);
        let request = add_clarification_comment(&request, "John Doe", "first", now());
        let request = add_clarification_comment(&request, "Amit Kumar", "second", now());
        assert_eq!(request.clarification_thread.len(), 2);
        assert_eq!(request.clarification_thread[0].text, "first");
        assert_eq!(request.clarification_thread[1].text, "second");
    }

    #[test]
    fn set_status_allows_any_transition() {
        let request = sample_request(DocumentStatus::Approved);
        let updated = set_status(&request, DocumentStatus::Pending);
        assert_eq!(updated.status, DocumentStatus::Pending);
        // Original untouched.
        assert_eq!(request.status, DocumentStatus::Approved);
    }
}
