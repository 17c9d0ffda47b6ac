//! Client entity and validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{new_entity_id, EntityId};

/// A client of the firm.
///
/// Clients own documents and requests only by reference (`client_id` on the
/// owned side); deleting a client must be cascaded by the deleting layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: EntityId,
    pub name: String,
    pub company: String,
    pub email: String,
    pub joined_date: NaiveDate,
}

impl Client {
    /// Create a client with a fresh id, joined today.
    pub fn new(
        name: impl Into<String>,
        company: impl Into<String>,
        email: impl Into<String>,
        joined_date: NaiveDate,
    ) -> Self {
        Self {
            id: new_entity_id("cli"),
            name: name.into(),
            company: company.into(),
            email: email.into(),
            joined_date,
        }
    }
}

/// Validate the fields of a new client. All three fields are required.
pub fn validate_client(name: &str, company: &str, email: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() || company.trim().is_empty() || email.trim().is_empty() {
        return Err(CoreError::Validation(
            "Client name, company and email are all required".to_string(),
        ));
    }
    if !email.contains('@') {
        return Err(CoreError::Validation(format!(
            "Invalid email address '{email}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_client_is_valid() {
        assert!(validate_client("John Doe", "Innovate Inc.", "john.doe@innovate.com").is_ok());
    }

    #[test]
    fn missing_fields_are_rejected() {
        assert!(validate_client("", "Innovate Inc.", "a@b.com").is_err());
        assert!(validate_client("John", "", "a@b.com").is_err());
        assert!(validate_client("John", "Innovate Inc.", "").is_err());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let result = validate_client("John", "Innovate Inc.", "not-an-email");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid email"));
    }

    #[test]
    fn new_client_gets_prefixed_id() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        let client = Client::new("John Doe", "Innovate Inc.", "john@innovate.com", date);
        assert!(client.id.starts_with("cli-"));
        assert_eq!(client.joined_date, date);
    }
}
