//! User role enumeration and permission helpers.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Role of a login identity.
///
/// `Client` is the only restricted role: a client user is linked to exactly
/// one client record and sees nothing else (see [`crate::visibility`]).
/// Template mutation is gated on `Admin` by the calling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Manager,
    Staff,
    Client,
    Viewer,
}

impl UserRole {
    pub const ALL: &'static [UserRole] = &[
        Self::Admin,
        Self::Manager,
        Self::Staff,
        Self::Client,
        Self::Viewer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Staff => "Staff",
            Self::Client => "Client",
            Self::Viewer => "Viewer",
        }
    }

    /// Parse a persisted role string.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "Admin" => Ok(Self::Admin),
            "Manager" => Ok(Self::Manager),
            "Staff" => Ok(Self::Staff),
            "Client" => Ok(Self::Client),
            "Viewer" => Ok(Self::Viewer),
            _ => Err(CoreError::Validation(format!(
                "Invalid user role '{s}'. Must be one of: Admin, Manager, Staff, Client, Viewer"
            ))),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    pub fn is_client(&self) -> bool {
        matches!(self, Self::Client)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_parse() {
        for role in UserRole::ALL {
            assert_eq!(UserRole::parse(role.as_str()).unwrap(), *role);
        }
    }

    #[test]
    fn parse_rejects_unknown_role() {
        assert!(UserRole::parse("Superuser").is_err());
        assert!(UserRole::parse("").is_err());
    }

    #[test]
    fn only_admin_is_admin() {
        assert!(UserRole::Admin.is_admin());
        for role in [
            UserRole::Manager,
            UserRole::Staff,
            UserRole::Client,
            UserRole::Viewer,
        ] {
            assert!(!role.is_admin());
        }
    }

    #[test]
    fn only_client_is_client() {
        assert!(UserRole::Client.is_client());
        assert!(!UserRole::Staff.is_client());
    }
}
