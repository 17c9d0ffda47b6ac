//! Global search over the visible collections.
//!
//! Case-insensitive substring matching; callers filter for role visibility
//! first so search can never widen what a user may see.

use crate::client::Client;
use crate::document::Document;
use crate::template::ComplianceTemplate;
use crate::visibility::VisibleData;

/// Maximum results returned per collection.
pub const MAX_RESULTS_PER_SECTION: usize = 20;

/// Matches grouped by collection.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub clients: Vec<Client>,
    pub documents: Vec<Document>,
    pub templates: Vec<ComplianceTemplate>,
}

/// Search clients, documents, and templates for `query`.
///
/// A blank query matches nothing.
pub fn search(data: &VisibleData, templates: &[ComplianceTemplate], query: &str) -> SearchResults {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchResults::default();
    }

    let clients = data
        .clients
        .iter()
        .filter(|c| {
            contains(&c.name, &needle) || contains(&c.company, &needle) || contains(&c.email, &needle)
        })
        .take(MAX_RESULTS_PER_SECTION)
        .cloned()
        .collect();

    let documents = data
        .documents
        .iter()
        .filter(|d| contains(&d.name, &needle))
        .take(MAX_RESULTS_PER_SECTION)
        .cloned()
        .collect();

    let templates = templates
        .iter()
        .filter(|t| contains(&t.name, &needle) || contains(&t.description, &needle))
        .take(MAX_RESULTS_PER_SECTION)
        .cloned()
        .collect();

    SearchResults {
        clients,
        documents,
        templates,
    }
}

fn contains(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document_type::DocumentType;
    use crate::status::DocumentStatus;
    use chrono::NaiveDate;

    fn sample() -> (VisibleData, Vec<ComplianceTemplate>) {
        let data = VisibleData {
            clients: vec![Client {
                id: "cli1".to_string(),
                name: "John Doe".to_string(),
                company: "Innovate Inc.".to_string(),
                email: "john.doe@innovate.com".to_string(),
                joined_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            }],
            documents: vec![Document {
                id: "doc1".to_string(),
                name: "Sales Ledger".to_string(),
                client_id: "cli1".to_string(),
                compliance_id: "com-gst".to_string(),
                request_id: "req1".to_string(),
                status: DocumentStatus::Approved,
                submitted_date: None,
                doc_type: DocumentType::Gst,
                expiry_date: None,
                drive_link: None,
                version_history: Vec::new(),
                rejection_reason: None,
            }],
            requests: Vec::new(),
        };
        let templates = vec![ComplianceTemplate::new(
            "GSTR-3B Monthly Filing",
            "Monthly Goods and Services Tax return filing.",
        )];
        (data, templates)
    }

    #[test]
    fn matches_are_case_insensitive() {
        let (data, templates) = sample();
        let results = search(&data, &templates, "innovate");
        assert_eq!(results.clients.len(), 1);
        let results = search(&data, &templates, "SALES");
        assert_eq!(results.documents.len(), 1);
    }

    #[test]
    fn template_description_is_searched() {
        let (data, templates) = sample();
        let results = search(&data, &templates, "services tax");
        assert_eq!(results.templates.len(), 1);
    }

    #[test]
    fn blank_query_matches_nothing() {
        let (data, templates) = sample();
        let results = search(&data, &templates, "   ");
        assert!(results.clients.is_empty());
        assert!(results.documents.is_empty());
        assert!(results.templates.is_empty());
    }

    #[test]
    fn unmatched_query_is_empty() {
        let (data, templates) = sample();
        let results = search(&data, &templates, "zzz-nothing");
        assert!(results.clients.is_empty());
        assert!(results.documents.is_empty());
        assert!(results.templates.is_empty());
    }
}
