//! Explicit session context.
//!
//! The active user is passed into operations rather than living in an
//! ambient global: a session is created at startup, replaced wholesale on
//! user switch, and dropped at session end.

use complytrack_core::error::CoreError;
use complytrack_core::roles::UserRole;
use complytrack_core::user::User;

/// The active user for the duration of a session.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn role(&self) -> UserRole {
        self.user.role
    }

    /// Client link of the active user, when the role is `Client`.
    pub fn client_id(&self) -> Option<&str> {
        self.user.client_id.as_deref()
    }

    /// Gate an admin-only operation.
    pub fn require_admin(&self) -> Result<(), CoreError> {
        if self.role().is_admin() {
            Ok(())
        } else {
            Err(CoreError::Forbidden(format!(
                "{} role may not perform this action",
                self.role()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: UserRole) -> User {
        User::new("Test User", role, None)
    }

    #[test]
    fn admin_passes_admin_gate() {
        let session = Session::new(user_with_role(UserRole::Admin));
        assert!(session.require_admin().is_ok());
    }

    #[test]
    fn non_admin_roles_fail_admin_gate() {
        for role in [
            UserRole::Manager,
            UserRole::Staff,
            UserRole::Client,
            UserRole::Viewer,
        ] {
            let session = Session::new(user_with_role(role));
            let result = session.require_admin();
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("Forbidden"));
        }
    }

    #[test]
    fn client_id_comes_from_user_link() {
        let user = User::new("John", UserRole::Client, Some("cli1".to_string()));
        let session = Session::new(user);
        assert_eq!(session.client_id(), Some("cli1"));
    }
}
