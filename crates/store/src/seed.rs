//! Default demo dataset, restored whenever a collection has never been
//! persisted.
//!
//! Ids are fixed (not generated) so the cross-references between the seeded
//! users, clients, templates, documents, and requests stay intact.

use chrono::{Days, NaiveDate, TimeZone, Utc};

use complytrack_core::client::Client;
use complytrack_core::document::{Document, DocumentVersion};
use complytrack_core::document_type::DocumentType;
use complytrack_core::request::{Comment, DocumentRequest, RequestedDocument};
use complytrack_core::roles::UserRole;
use complytrack_core::status::DocumentStatus;
use complytrack_core::template::{
    ComplianceFrequency, ComplianceTemplate, DueDateRule, RequiredDocument,
};
use complytrack_core::types::Timestamp;
use complytrack_core::user::User;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid")
}

fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("seed timestamps are valid")
}

pub fn default_users() -> Vec<User> {
    vec![
        User {
            id: "user1".to_string(),
            name: "Sanjay Sharma".to_string(),
            role: UserRole::Admin,
            client_id: None,
        },
        User {
            id: "user2".to_string(),
            name: "Priya Patel".to_string(),
            role: UserRole::Manager,
            client_id: None,
        },
        User {
            id: "user3".to_string(),
            name: "Amit Kumar".to_string(),
            role: UserRole::Staff,
            client_id: None,
        },
        User {
            id: "user4".to_string(),
            name: "John Doe (Client)".to_string(),
            role: UserRole::Client,
            client_id: Some("cli1".to_string()),
        },
    ]
}

pub fn default_clients() -> Vec<Client> {
    vec![
        Client {
            id: "cli1".to_string(),
            name: "John Doe".to_string(),
            company: "Innovate Inc.".to_string(),
            email: "john.doe@innovate.com".to_string(),
            joined_date: date(2023, 1, 15),
        },
        Client {
            id: "cli2".to_string(),
            name: "Jane Smith".to_string(),
            company: "Solutions Co.".to_string(),
            email: "jane.smith@solutions.co".to_string(),
            joined_date: date(2022, 11, 20),
        },
        Client {
            id: "cli3".to_string(),
            name: "Peter Jones".to_string(),
            company: "Creative LLC".to_string(),
            email: "peter.j@creative.llc".to_string(),
            joined_date: date(2023, 3, 10),
        },
        Client {
            id: "cli4".to_string(),
            name: "Mary Garcia".to_string(),
            company: "Tech Forward".to_string(),
            email: "mary.g@techforward.com".to_string(),
            joined_date: date(2021, 8, 5),
        },
    ]
}

pub fn default_templates() -> Vec<ComplianceTemplate> {
    vec![
        ComplianceTemplate {
            id: "com-gst".to_string(),
            name: "GSTR-3B Monthly Filing".to_string(),
            description: "Monthly Goods and Services Tax return filing.".to_string(),
            required_documents: vec![
                required_doc("gst-doc-1", "Sales Ledger", DocumentType::Gst),
                required_doc("gst-doc-2", "Purchase Ledger", DocumentType::Gst),
                required_doc("gst-doc-3", "E-Way Bills Report", DocumentType::Gst),
            ],
            frequency: ComplianceFrequency::Monthly,
            due_date_rule: DueDateRule {
                day: 20,
                month_offset: 1,
            },
            auto_recurrence: true,
        },
        ComplianceTemplate {
            id: "com-roc".to_string(),
            name: "ROC Annual Filing (AOC-4)".to_string(),
            description: "Registrar of Companies annual financial statement filing.".to_string(),
            required_documents: vec![
                required_doc("roc-doc-1", "Audited Balance Sheet", DocumentType::Financial),
                required_doc("roc-doc-2", "Profit & Loss Statement", DocumentType::Financial),
                required_doc("roc-doc-3", "Director's Report", DocumentType::Legal),
            ],
            frequency: ComplianceFrequency::Annually,
            due_date_rule: DueDateRule {
                day: 30,
                month_offset: 10,
            },
            auto_recurrence: true,
        },
        ComplianceTemplate {
            id: "com-it".to_string(),
            name: "Income Tax Return (ITR)".to_string(),
            description: "Annual income tax return filing for the company.".to_string(),
            required_documents: vec![
                required_doc("it-doc-1", "Form 26AS", DocumentType::It),
                required_doc("it-doc-2", "Capital Gains Statement", DocumentType::Financial),
            ],
            frequency: ComplianceFrequency::Annually,
            due_date_rule: DueDateRule {
                day: 31,
                month_offset: 7,
            },
            auto_recurrence: true,
        },
        ComplianceTemplate {
            id: "com-kyc".to_string(),
            name: "KYC Verification".to_string(),
            description: "One-time Know Your Customer identity verification.".to_string(),
            required_documents: vec![
                required_doc("kyc-doc-1", "PAN Card Copy", DocumentType::IdProof),
                required_doc(
                    "kyc-doc-2",
                    "Proof of Address (Utility Bill)",
                    DocumentType::IdProof,
                ),
                required_doc(
                    "kyc-doc-3",
                    "GST Registration Certificate",
                    DocumentType::License,
                ),
            ],
            frequency: ComplianceFrequency::OneTime,
            due_date_rule: DueDateRule {
                day: 15,
                month_offset: 0,
            },
            auto_recurrence: false,
        },
    ]
}

fn required_doc(id: &str, name: &str, doc_type: DocumentType) -> RequiredDocument {
    RequiredDocument {
        id: id.to_string(),
        name: name.to_string(),
        doc_type,
    }
}

/// Sample documents. Expiry dates near the edge of the notification window
/// are placed relative to `today` so the demo keeps showing an expired and
/// an expiring-soon row.
pub fn default_documents(today: NaiveDate) -> Vec<Document> {
    let expired = today.checked_sub_days(Days::new(45)).unwrap_or(today);
    let expiring_soon = today.checked_add_days(Days::new(15)).unwrap_or(today);

    vec![
        Document {
            id: "doc1".to_string(),
            name: "Sales Ledger".to_string(),
            client_id: "cli1".to_string(),
            compliance_id: "com-gst".to_string(),
            request_id: "req3".to_string(),
            status: DocumentStatus::Approved,
            submitted_date: Some(date(2024, 3, 5)),
            doc_type: DocumentType::Gst,
            expiry_date: None,
            drive_link: Some("https://drive.google.com/d/Innovate_Inc./req3/Sales_Ledger".to_string()),
            version_history: vec![
                version(1, DocumentStatus::Received, "Initial submission by client.", 2024, 3, 5, "John Doe"),
                version(2, DocumentStatus::UnderReview, "Review started.", 2024, 3, 6, "Amit Kumar"),
                version(3, DocumentStatus::Approved, "Looks good.", 2024, 3, 7, "Priya Patel"),
            ],
            rejection_reason: None,
        },
        Document {
            id: "doc2".to_string(),
            name: "PAN Card Copy".to_string(),
            client_id: "cli2".to_string(),
            compliance_id: "com-kyc".to_string(),
            request_id: "req2".to_string(),
            status: DocumentStatus::UnderReview,
            submitted_date: Some(date(2024, 5, 20)),
            doc_type: DocumentType::IdProof,
            expiry_date: Some(date(2028, 8, 15)),
            drive_link: None,
            version_history: vec![
                version(1, DocumentStatus::Received, "Client uploaded.", 2024, 5, 20, "Jane Smith"),
                version(2, DocumentStatus::UnderReview, "Pending verification.", 2024, 5, 21, "Amit Kumar"),
            ],
            rejection_reason: None,
        },
        Document {
            id: "doc3".to_string(),
            name: "Audited Balance Sheet".to_string(),
            client_id: "cli3".to_string(),
            compliance_id: "com-roc".to_string(),
            request_id: "req1".to_string(),
            status: DocumentStatus::Pending,
            submitted_date: None,
            doc_type: DocumentType::Financial,
            expiry_date: None,
            drive_link: None,
            version_history: Vec::new(),
            rejection_reason: None,
        },
        Document {
            id: "doc5".to_string(),
            name: "Utility Bill".to_string(),
            client_id: "cli2".to_string(),
            compliance_id: "com-kyc".to_string(),
            request_id: "req2".to_string(),
            status: DocumentStatus::Rejected,
            submitted_date: Some(date(2024, 5, 18)),
            doc_type: DocumentType::IdProof,
            expiry_date: None,
            drive_link: None,
            version_history: vec![
                version(1, DocumentStatus::Received, "Submitted.", 2024, 5, 18, "Jane Smith"),
                version(2, DocumentStatus::Rejected, "Bill is too old.", 2024, 5, 19, "Amit Kumar"),
            ],
            rejection_reason: Some(
                "Bill is older than 3 months. Please provide a recent one.".to_string(),
            ),
        },
        Document {
            id: "doc7".to_string(),
            name: "Shop & Establishment License".to_string(),
            client_id: "cli3".to_string(),
            compliance_id: "com-kyc".to_string(),
            request_id: "req1".to_string(),
            status: DocumentStatus::Approved,
            submitted_date: Some(date(2024, 1, 10)),
            doc_type: DocumentType::License,
            expiry_date: Some(expired),
            drive_link: Some("#".to_string()),
            version_history: Vec::new(),
            rejection_reason: None,
        },
        Document {
            id: "doc8".to_string(),
            name: "Driver's License".to_string(),
            client_id: "cli4".to_string(),
            compliance_id: "com-kyc".to_string(),
            request_id: "req4".to_string(),
            status: DocumentStatus::Received,
            submitted_date: Some(date(2024, 6, 15)),
            doc_type: DocumentType::IdProof,
            expiry_date: Some(expiring_soon),
            drive_link: None,
            version_history: Vec::new(),
            rejection_reason: None,
        },
    ]
}

fn version(
    number: u32,
    status: DocumentStatus,
    notes: &str,
    year: i32,
    month: u32,
    day: u32,
    updated_by: &str,
) -> DocumentVersion {
    DocumentVersion {
        version: number,
        status,
        notes: notes.to_string(),
        updated_at: timestamp(year, month, day, 9, 0),
        updated_by: updated_by.to_string(),
    }
}

pub fn default_requests() -> Vec<DocumentRequest> {
    vec![
        DocumentRequest {
            id: "req1".to_string(),
            client_id: "cli3".to_string(),
            compliance_id: "com-roc".to_string(),
            documents: vec![
                requested_doc("d1", "Audited Balance Sheet"),
                requested_doc("d2", "Director's Report"),
            ],
            status: DocumentStatus::Pending,
            request_date: date(2024, 6, 1),
            due_date: date(2024, 6, 30),
            portal_token: "ab-cd-ef".to_string(),
            clarification_thread: Vec::new(),
        },
        DocumentRequest {
            id: "req2".to_string(),
            client_id: "cli2".to_string(),
            compliance_id: "com-kyc".to_string(),
            documents: vec![
                requested_doc("d3", "PAN Card Copy"),
                requested_doc("d4", "Recent Utility Bill"),
            ],
            status: DocumentStatus::Approved,
            request_date: date(2024, 5, 10),
            due_date: date(2024, 5, 25),
            portal_token: "gh-ij-kl".to_string(),
            clarification_thread: Vec::new(),
        },
        DocumentRequest {
            id: "req3".to_string(),
            client_id: "cli1".to_string(),
            compliance_id: "com-gst".to_string(),
            documents: vec![
                requested_doc("d5", "Sales Ledger"),
                requested_doc("d6", "Purchase Ledger"),
            ],
            status: DocumentStatus::ClarificationNeeded,
            request_date: date(2024, 2, 20),
            due_date: date(2024, 3, 15),
            portal_token: "mn-op-qr".to_string(),
            clarification_thread: vec![
                Comment {
                    id: "cmt1".to_string(),
                    author: "John Doe".to_string(),
                    text: "I have uploaded the sales ledger, but the purchase ledger for last \
                           week is still pending from my accounts team. Will upload by EOD."
                        .to_string(),
                    timestamp: timestamp(2024, 6, 18, 10, 30),
                },
                Comment {
                    id: "cmt2".to_string(),
                    author: "Amit Kumar".to_string(),
                    text: "Thanks for the update, John. Please upload it as soon as possible to \
                           avoid delays."
                        .to_string(),
                    timestamp: timestamp(2024, 6, 18, 11, 0),
                },
            ],
        },
    ]
}

fn requested_doc(id: &str, name: &str) -> RequestedDocument {
    RequestedDocument {
        id: id.to_string(),
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_client_users_link_to_seeded_clients() {
        let clients = default_clients();
        for user in default_users() {
            if let Some(client_id) = &user.client_id {
                assert!(clients.iter().any(|c| &c.id == client_id));
            }
        }
    }

    #[test]
    fn seeded_template_checklist_ids_are_unique_per_template() {
        for template in default_templates() {
            let mut ids: Vec<_> = template
                .required_documents
                .iter()
                .map(|d| d.id.as_str())
                .collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), template.required_documents.len());
        }
    }

    #[test]
    fn seeded_portal_tokens_are_unique() {
        let requests = default_requests();
        let mut tokens: Vec<_> = requests.iter().map(|r| r.portal_token.as_str()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), requests.len());
    }

    #[test]
    fn seeded_version_histories_are_sequential() {
        let today = date(2024, 6, 18);
        for doc in default_documents(today) {
            for (i, entry) in doc.version_history.iter().enumerate() {
                assert_eq!(entry.version, i as u32 + 1);
            }
        }
    }

    #[test]
    fn seeded_documents_cover_expiry_states() {
        use complytrack_core::expiry::{classify, ExpiryStatus};
        let today = date(2024, 6, 18);
        let docs = default_documents(today);
        let statuses: Vec<_> = docs
            .iter()
            .map(|d| classify(d.expiry_date, today))
            .collect();
        assert!(statuses.contains(&ExpiryStatus::Expired));
        assert!(statuses.contains(&ExpiryStatus::ExpiringSoon));
        assert!(statuses.contains(&ExpiryStatus::Valid));
    }
}
