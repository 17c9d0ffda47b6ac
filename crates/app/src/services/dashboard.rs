//! Dashboard rollups: summary cards, status tallies, and the expiring
//! notification feed. All pure derivations over the session's visible data.

use chrono::NaiveDate;

use complytrack_core::document::Document;
use complytrack_core::expiry;
use complytrack_core::status::DocumentStatus;
use complytrack_core::template::ComplianceTemplate;
use complytrack_core::visibility::VisibleData;

/// How many documents appear in the "recent updates" table.
pub const RECENT_DOCUMENTS_LIMIT: usize = 5;

/// The four headline cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_templates: usize,
    pub pending_requests: usize,
    pub documents_reviewed: usize,
    pub active_clients: usize,
}

/// Compute the headline summary.
///
/// "Pending" counts every request not yet approved, and "reviewed" counts
/// documents with a terminal review outcome.
pub fn summary(data: &VisibleData, templates: &[ComplianceTemplate]) -> DashboardSummary {
    DashboardSummary {
        total_templates: templates.len(),
        pending_requests: data
            .requests
            .iter()
            .filter(|r| r.status != DocumentStatus::Approved)
            .count(),
        documents_reviewed: data
            .documents
            .iter()
            .filter(|d| d.status.is_reviewed())
            .count(),
        active_clients: data.clients.len(),
    }
}

/// Document count per status, one entry per variant.
pub fn status_breakdown(documents: &[Document]) -> Vec<(DocumentStatus, usize)> {
    DocumentStatus::ALL
        .iter()
        .map(|status| {
            let count = documents.iter().filter(|d| d.status == *status).count();
            (*status, count)
        })
        .collect()
}

/// The most recent documents for the updates table.
pub fn recent_documents(documents: &[Document]) -> &[Document] {
    &documents[..documents.len().min(RECENT_DOCUMENTS_LIMIT)]
}

/// Number of documents feeding the expiring-soon notification badge.
pub fn expiring_notification_count(documents: &[Document], today: NaiveDate) -> usize {
    expiry::expiring_soon(documents, today).len()
}

/// Per-client rollup for the client dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOverview {
    pub total_documents: usize,
    pub approved_documents: usize,
    pub pending_requests: usize,
}

/// Compute the rollup for one client from already-scoped data.
pub fn client_overview(data: &VisibleData, client_id: &str) -> ClientOverview {
    let documents: Vec<_> = data
        .documents
        .iter()
        .filter(|d| d.client_id == client_id)
        .collect();
    ClientOverview {
        total_documents: documents.len(),
        approved_documents: documents
            .iter()
            .filter(|d| d.status == DocumentStatus::Approved)
            .count(),
        pending_requests: data
            .requests
            .iter()
            .filter(|r| r.client_id == client_id && r.status != DocumentStatus::Approved)
            .count(),
    }
}
