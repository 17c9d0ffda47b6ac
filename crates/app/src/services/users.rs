//! User management and user switching.

use complytrack_core::error::CoreError;
use complytrack_core::roles::UserRole;
use complytrack_core::user::{validate_user, User};

use crate::error::AppResult;
use crate::session::Session;
use crate::state::AppState;

/// Form input for adding or editing a user.
#[derive(Debug, Clone)]
pub struct UserForm {
    pub name: String,
    pub role: UserRole,
    pub client_id: Option<String>,
}

/// Add a user.
pub fn add_user(state: &mut AppState, form: UserForm) -> AppResult<User> {
    validate_user(&form.name, form.role, form.client_id.as_deref())?;

    // The client link only applies to Client-role users.
    let client_id = if form.role.is_client() {
        form.client_id
    } else {
        None
    };
    let user = User::new(form.name, form.role, client_id);
    state.users.insert(0, user.clone());
    state.persist_users();
    Ok(user)
}

/// Edit an existing user in place.
pub fn update_user(state: &mut AppState, user_id: &str, form: UserForm) -> AppResult<User> {
    validate_user(&form.name, form.role, form.client_id.as_deref())?;

    let user = state
        .users
        .iter_mut()
        .find(|u| u.id == user_id)
        .ok_or_else(|| CoreError::not_found("user", user_id))?;

    user.name = form.name;
    user.role = form.role;
    user.client_id = if form.role.is_client() {
        form.client_id
    } else {
        None
    };
    let updated = user.clone();
    state.persist_users();
    Ok(updated)
}

/// Delete a user. Does not cascade to any other collection.
pub fn delete_user(state: &mut AppState, user_id: &str) -> AppResult<()> {
    if !state.users.iter().any(|u| u.id == user_id) {
        return Err(CoreError::not_found("user", user_id).into());
    }
    state.users.retain(|u| u.id != user_id);
    state.persist_users();
    Ok(())
}

/// Switch the active user, returning the replacement session.
///
/// Visibility filtering keys off the session, so everything the UI shows
/// must be re-derived from the returned session.
pub fn switch_user(state: &mut AppState, user_id: &str) -> AppResult<Session> {
    let user = state
        .users
        .iter()
        .find(|u| u.id == user_id)
        .cloned()
        .ok_or_else(|| CoreError::not_found("user", user_id))?;
    state.persist_current_user(&user);
    Ok(Session::new(user))
}
