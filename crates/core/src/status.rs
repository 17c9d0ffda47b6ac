//! Review status enumeration shared by documents and document requests.
//!
//! The wire strings ("Under Review", "Clarification Needed") match the
//! values persisted by earlier releases, so stored data round-trips
//! unchanged.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle status of a document or a document request.
///
/// The lifecycle is deliberately permissive: any status is reachable from
/// any status. Progress guarantees come from the append-only version
/// history, not from a transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    Pending,
    Received,
    #[serde(rename = "Under Review")]
    UnderReview,
    Approved,
    Rejected,
    #[serde(rename = "Clarification Needed")]
    ClarificationNeeded,
}

impl DocumentStatus {
    /// Every status, in lifecycle order. Useful for tallies and dropdowns.
    pub const ALL: &'static [DocumentStatus] = &[
        Self::Pending,
        Self::Received,
        Self::UnderReview,
        Self::Approved,
        Self::Rejected,
        Self::ClarificationNeeded,
    ];

    /// Return the status as its persisted string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Received => "Received",
            Self::UnderReview => "Under Review",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::ClarificationNeeded => "Clarification Needed",
        }
    }

    /// Parse a persisted status string.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Received" => Ok(Self::Received),
            "Under Review" => Ok(Self::UnderReview),
            "Approved" => Ok(Self::Approved),
            "Rejected" => Ok(Self::Rejected),
            "Clarification Needed" => Ok(Self::ClarificationNeeded),
            _ => Err(CoreError::Validation(format!(
                "Invalid document status '{s}'. Must be one of: {}",
                Self::ALL
                    .iter()
                    .map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }

    /// Whether this status counts as reviewed (a terminal review outcome).
    pub fn is_reviewed(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Display descriptor for this status.
    ///
    /// Total mapping: adding a status without a descriptor is a compile
    /// error, so the UI can never meet an unhandled variant.
    pub fn display(&self) -> StatusDisplay {
        match self {
            Self::Pending => StatusDisplay {
                label: "Pending",
                tone: StatusTone::Amber,
            },
            Self::Received => StatusDisplay {
                label: "Received",
                tone: StatusTone::Blue,
            },
            Self::UnderReview => StatusDisplay {
                label: "Under Review",
                tone: StatusTone::Purple,
            },
            Self::Approved => StatusDisplay {
                label: "Approved",
                tone: StatusTone::Green,
            },
            Self::Rejected => StatusDisplay {
                label: "Rejected",
                tone: StatusTone::Red,
            },
            Self::ClarificationNeeded => StatusDisplay {
                label: "Clarification Needed",
                tone: StatusTone::Gray,
            },
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a status is rendered: human label plus a color tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    pub label: &'static str,
    pub tone: StatusTone,
}

/// Badge color family for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Amber,
    Blue,
    Purple,
    Green,
    Red,
    Gray,
}
