//! Template library operations. All mutations are admin-gated.

use complytrack_core::document_type::DocumentType;
use complytrack_core::error::CoreError;
use complytrack_core::template::{self, ComplianceTemplate};

use crate::error::AppResult;
use crate::session::Session;
use crate::state::AppState;

/// Add a template with an empty checklist.
pub fn add_template(
    state: &mut AppState,
    session: &Session,
    name: &str,
    description: &str,
) -> AppResult<ComplianceTemplate> {
    session.require_admin()?;
    template::validate_template(name, description)?;

    let created = ComplianceTemplate::new(name.trim(), description.trim());
    state.templates.push(created.clone());
    state.persist_templates();
    Ok(created)
}

/// Delete a template.
///
/// Existing requests keep their checklist snapshots; only the reusable
/// definition goes away.
pub fn delete_template(
    state: &mut AppState,
    session: &Session,
    template_id: &str,
) -> AppResult<()> {
    session.require_admin()?;
    if !state.templates.iter().any(|t| t.id == template_id) {
        return Err(CoreError::not_found("template", template_id).into());
    }
    state.templates.retain(|t| t.id != template_id);
    state.persist_templates();
    Ok(())
}

/// Append an entry to a template's required-document checklist.
pub fn add_required_document(
    state: &mut AppState,
    session: &Session,
    template_id: &str,
    name: &str,
    doc_type: DocumentType,
) -> AppResult<ComplianceTemplate> {
    session.require_admin()?;
    let current = find_template(state, template_id)?;
    let updated = template::add_required_document(&current, name, doc_type)?;
    replace_template(state, updated.clone());
    Ok(updated)
}

/// Remove an entry from a template's required-document checklist.
pub fn remove_required_document(
    state: &mut AppState,
    session: &Session,
    template_id: &str,
    doc_id: &str,
) -> AppResult<ComplianceTemplate> {
    session.require_admin()?;
    let current = find_template(state, template_id)?;
    let updated = template::remove_required_document(&current, doc_id)?;
    replace_template(state, updated.clone());
    Ok(updated)
}

fn find_template(state: &AppState, template_id: &str) -> Result<ComplianceTemplate, CoreError> {
    state
        .templates
        .iter()
        .find(|t| t.id == template_id)
        .cloned()
        .ok_or_else(|| CoreError::not_found("template", template_id))
}

fn replace_template(state: &mut AppState, updated: ComplianceTemplate) {
    if let Some(slot) = state.templates.iter_mut().find(|t| t.id == updated.id) {
        *slot = updated;
    }
    state.persist_templates();
}
