//! Saved table-filter views.

use complytrack_core::error::CoreError;
use complytrack_core::saved_view::SavedView;

use crate::error::AppResult;
use crate::state::AppState;

/// Save a named filter set.
pub fn save_view(
    state: &mut AppState,
    name: &str,
    filters: serde_json::Map<String, serde_json::Value>,
) -> AppResult<SavedView> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("View name is required".to_string()).into());
    }
    let view = SavedView::new(name.trim(), filters);
    state.saved_views.push(view.clone());
    state.persist_saved_views();
    Ok(view)
}

/// Delete a saved view.
pub fn delete_view(state: &mut AppState, view_id: &str) -> AppResult<()> {
    if !state.saved_views.iter().any(|v| v.id == view_id) {
        return Err(CoreError::not_found("saved view", view_id).into());
    }
    state.saved_views.retain(|v| v.id != view_id);
    state.persist_saved_views();
    Ok(())
}
