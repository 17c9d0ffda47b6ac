//! Derived expiry classification over documents.
//!
//! Pure computation; feeds row highlighting, the notification count, and
//! the dashboard's expiring-documents list.

use chrono::NaiveDate;

use crate::document::Document;

/// Window, in days, within which a document counts as expiring soon.
pub const EXPIRING_SOON_WINDOW_DAYS: i64 = 30;

/// Expiry proximity of a single document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    Valid,
    ExpiringSoon,
    Expired,
}

/// Classify an expiry date relative to `today`.
///
/// No expiry date means the document never expires.
pub fn classify(expiry_date: Option<NaiveDate>, today: NaiveDate) -> ExpiryStatus {
    let Some(expiry) = expiry_date else {
        return ExpiryStatus::Valid;
    };
    let days_until_expiry = (expiry - today).num_days();
    if days_until_expiry < 0 {
        ExpiryStatus::Expired
    } else if days_until_expiry <= EXPIRING_SOON_WINDOW_DAYS {
        ExpiryStatus::ExpiringSoon
    } else {
        ExpiryStatus::Valid
    }
}

/// Documents expiring within the notification window.
///
/// Already-expired documents are excluded from the notification feed; they
/// surface through row highlighting instead.
pub fn expiring_soon(documents: &[Document], today: NaiveDate) -> Vec<&Document> {
    documents
        .iter()
        .filter(|d| classify(d.expiry_date, today) == ExpiryStatus::ExpiringSoon)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document_type::DocumentType;
    use crate::status::DocumentStatus;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 18).unwrap()
    }

    fn doc_expiring(id: &str, expiry_date: Option<NaiveDate>) -> Document {
        Document {
            id: id.to_string(),
            name: "License".to_string(),
            client_id: "cli1".to_string(),
            compliance_id: "com-kyc".to_string(),
            request_id: "req1".to_string(),
            status: DocumentStatus::Approved,
            submitted_date: Some(today()),
            doc_type: DocumentType::License,
            expiry_date,
            drive_link: None,
            version_history: Vec::new(),
            rejection_reason: None,
        }
    }

    #[test]
    fn no_expiry_date_is_valid() {
        assert_eq!(classify(None, today()), ExpiryStatus::Valid);
    }

    #[test]
    fn yesterday_is_expired() {
        let yesterday = today().checked_sub_days(Days::new(1)).unwrap();
        assert_eq!(classify(Some(yesterday), today()), ExpiryStatus::Expired);
    }

    #[test]
    fn today_is_expiring_soon() {
        assert_eq!(classify(Some(today()), today()), ExpiryStatus::ExpiringSoon);
    }

    #[test]
    fn day_thirty_is_expiring_soon() {
        let in_thirty = today().checked_add_days(Days::new(30)).unwrap();
        assert_eq!(classify(Some(in_thirty), today()), ExpiryStatus::ExpiringSoon);
    }

    #[test]
    fn day_thirty_one_is_valid() {
        let in_thirty_one = today().checked_add_days(Days::new(31)).unwrap();
        assert_eq!(classify(Some(in_thirty_one), today()), ExpiryStatus::Valid);
    }

    #[test]
    fn expiring_soon_excludes_expired() {
        let expired = today().checked_sub_days(Days::new(10)).unwrap();
        let soon = today().checked_add_days(Days::new(15)).unwrap();
        let far = today().checked_add_days(Days::new(200)).unwrap();
        let docs = vec![
            doc_expiring("doc1", Some(expired)),
            doc_expiring("doc2", Some(soon)),
            doc_expiring("doc3", Some(far)),
            doc_expiring("doc4", None),
        ];
        let expiring = expiring_soon(&docs, today());
        assert_eq!(expiring.len(), 1);
        assert_eq!(expiring[0].id, "doc2");
    }
}
