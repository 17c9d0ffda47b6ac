//! Document category enumeration.
//!
//! Wire strings match the values persisted by earlier releases, including
//! the slash in "License/Registration".

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Category of a submitted or requested document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "ID Proof")]
    IdProof,
    #[serde(rename = "Financial Statement")]
    Financial,
    #[serde(rename = "Legal Agreement")]
    Legal,
    #[serde(rename = "Operational Form")]
    Operational,
    #[serde(rename = "GST Filing")]
    Gst,
    #[serde(rename = "TDS Filing")]
    Tds,
    #[serde(rename = "ROC Filing")]
    Roc,
    #[serde(rename = "IT Filing")]
    It,
    #[serde(rename = "License/Registration")]
    License,
    Other,
}

impl DocumentType {
    pub const ALL: &'static [DocumentType] = &[
        Self::IdProof,
        Self::Financial,
        Self::Legal,
        Self::Operational,
        Self::Gst,
        Self::Tds,
        Self::Roc,
        Self::It,
        Self::License,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IdProof => "ID Proof",
            Self::Financial => "Financial Statement",
            Self::Legal => "Legal Agreement",
            Self::Operational => "Operational Form",
            Self::Gst => "GST Filing",
            Self::Tds => "TDS Filing",
            Self::Roc => "ROC Filing",
            Self::It => "IT Filing",
            Self::License => "License/Registration",
            Self::Other => "Other",
        }
    }

    /// Parse a persisted document type string.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid document type '{s}'. Must be one of: {}",
                    Self::ALL
                        .iter()
                        .map(|t| t.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_parse() {
        for doc_type in DocumentType::ALL {
            assert_eq!(DocumentType::parse(doc_type.as_str()).unwrap(), *doc_type);
        }
    }

    #[test]
    fn parse_rejects_unknown_type() {
        assert!(DocumentType::parse("Invoice").is_err());
    }

    #[test]
    fn serde_uses_display_strings() {
        let json = serde_json::to_string(&DocumentType::IdProof).unwrap();
        assert_eq!(json, r#""ID Proof""#);
        let json = serde_json::to_string(&DocumentType::License).unwrap();
        assert_eq!(json, r#""License/Registration""#);
    }

    #[test]
    fn all_covers_ten_categories() {
        assert_eq!(DocumentType::ALL.len(), 10);
    }
}
