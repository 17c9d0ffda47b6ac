//! Global search, scoped to what the session may see.

use complytrack_core::search::{self, SearchResults};

use crate::session::Session;
use crate::state::AppState;

/// Search clients, documents, and templates visible to this session.
pub fn global_search(state: &AppState, session: &Session, query: &str) -> SearchResults {
    let visible = state.visible(session);
    search::search(&visible, &state.templates, query)
}
