//! Compliance template entity and the request instantiation engine.
//!
//! A template is the reusable definition of a compliance obligation: a
//! required-document checklist, a filing frequency, and a due-date rule.
//! Creating a request stamps the checklist out as a point-in-time copy, so
//! later template edits never retroactively change an existing request.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::document_type::DocumentType;
use crate::error::CoreError;
use crate::portal;
use crate::request::{DocumentRequest, RequestedDocument};
use crate::status::DocumentStatus;
use crate::types::{new_entity_id, EntityId};

/// How often a compliance obligation recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceFrequency {
    Monthly,
    Quarterly,
    Annually,
    #[serde(rename = "One-Time")]
    OneTime,
}

impl ComplianceFrequency {
    pub const ALL: &'static [ComplianceFrequency] = &[
        Self::Monthly,
        Self::Quarterly,
        Self::Annually,
        Self::OneTime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Annually => "Annually",
            Self::OneTime => "One-Time",
        }
    }
}

impl std::fmt::Display for ComplianceFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Due-date rule: day of month plus an offset in months from the request
/// date. `{ day: 20, month_offset: 1 }` means the 20th of the following
/// month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDateRule {
    pub day: u32,
    pub month_offset: u32,
}

/// One entry in a template's required-document checklist.
///
/// Entry ids are unique within their template; request checklists copy the
/// names but get fresh ids of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredDocument {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
}

/// Reusable definition of a compliance obligation.
///
/// `auto_recurrence` is carried as data only; nothing schedules recurring
/// requests from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceTemplate {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub required_documents: Vec<RequiredDocument>,
    pub frequency: ComplianceFrequency,
    pub due_date_rule: DueDateRule,
    pub auto_recurrence: bool,
}

impl ComplianceTemplate {
    /// Create a template with a fresh id and an empty checklist.
    ///
    /// New templates default to one-time frequency with a 15th-of-this-month
    /// due rule; both are editable afterwards.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: new_entity_id("com"),
            name: name.into(),
            description: description.into(),
            required_documents: Vec::new(),
            frequency: ComplianceFrequency::OneTime,
            due_date_rule: DueDateRule {
                day: 15,
                month_offset: 0,
            },
            auto_recurrence: false,
        }
    }
}

/// Validate the fields of a new template. Name and description are required.
pub fn validate_template(name: &str, description: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() || description.trim().is_empty() {
        return Err(CoreError::Validation(
            "Template name and description are both required".to_string(),
        ));
    }
    Ok(())
}

/// Append a checklist entry with a freshly generated id.
///
/// Pure: returns the updated template. Admin-only, enforced by the caller.
pub fn add_required_document(
    template: &ComplianceTemplate,
    name: &str,
    doc_type: DocumentType,
) -> Result<ComplianceTemplate, CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation(
            "Required document name must not be empty".to_string(),
        ));
    }
    let mut updated = template.clone();
    updated.required_documents.push(RequiredDocument {
        id: new_entity_id("doc-req"),
        name: name.to_string(),
        doc_type,
    });
    Ok(updated)
}

/// Remove a checklist entry by id.
///
/// Pure: returns the updated template. Removing an unknown id is a
/// [`CoreError::NotFound`].
pub fn remove_required_document(
    template: &ComplianceTemplate,
    doc_id: &str,
) -> Result<ComplianceTemplate, CoreError> {
    if !template.required_documents.iter().any(|d| d.id == doc_id) {
        return Err(CoreError::not_found("required document", doc_id));
    }
    let mut updated = template.clone();
    updated.required_documents.retain(|d| d.id != doc_id);
    Ok(updated)
}

/// Compute the default due date for a request created `today` under `rule`.
///
/// The month offset is added first, then the rule's day is clamped to the
/// target month's length (a day-31 rule lands on Apr 30 in April).
pub fn due_date_from_rule(rule: DueDateRule, today: NaiveDate) -> NaiveDate {
    let months = today.month0() + rule.month_offset;
    let year = today.year() + (months / 12) as i32;
    let month = months % 12 + 1;
    let day = rule.day.clamp(1, days_in_month(year, month));
    // Constructed from a clamped day within a known-valid month.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(today)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Stamp a template out as a concrete request for one client.
///
/// The checklist is copied by name with fresh request-scoped ids; the
/// template is not mutated. The portal token is generated fresh and is
/// guaranteed distinct from every token in `existing_tokens`.
pub fn instantiate_request(
    template: &ComplianceTemplate,
    client_id: &str,
    due_date: NaiveDate,
    today: NaiveDate,
    existing_tokens: &HashSet<String>,
) -> DocumentRequest {
    let documents = template
        .required_documents
        .iter()
        .map(|d| RequestedDocument {
            id: new_entity_id("reqdoc"),
            name: d.name.clone(),
        })
        .collect();

    DocumentRequest {
        id: new_entity_id("req"),
        client_id: client_id.to_string(),
        compliance_id: template.id.clone(),
        documents,
        status: DocumentStatus::Pending,
        request_date: today,
        due_date,
        portal_token: portal::generate_unique_token(existing_tokens),
        clarification_thread: Vec::new(),
    }
}
