//! Login identity entity and validation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::roles::UserRole;
use crate::types::{new_entity_id, EntityId};

/// A login identity.
///
/// `client_id` links a `Client`-role user to exactly one client record and
/// is meaningless for every other role. Deleting a user does not cascade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<EntityId>,
}

impl User {
    /// Create a user with a fresh id.
    pub fn new(name: impl Into<String>, role: UserRole, client_id: Option<EntityId>) -> Self {
        Self {
            id: new_entity_id("user"),
            name: name.into(),
            role,
            client_id,
        }
    }
}

/// Validate the fields of a new or edited user.
///
/// A `Client`-role user must carry a client link; the link is ignored for
/// other roles rather than rejected, since the role can be switched later.
pub fn validate_user(name: &str, role: UserRole, client_id: Option<&str>) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "User name must not be empty".to_string(),
        ));
    }
    if role.is_client() && client_id.map_or(true, |c| c.trim().is_empty()) {
        return Err(CoreError::Validation(
            "A Client-role user must be linked to a client".to_string(),
        ));
    }
    Ok(())
}
