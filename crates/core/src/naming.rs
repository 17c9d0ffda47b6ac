//! Drive link naming convention.
//!
//! Actual file storage is out of scope; an approved document gets a
//! deterministic, human-readable synthetic path derived from the client,
//! the request, and the document name.

/// Base of every generated drive link.
pub const DRIVE_LINK_BASE: &str = "https://drive.google.com/d";

/// Generate the drive link for an approved document.
///
/// Convention: `{base}/{client_name}/{request_id}/{document_name}` with
/// spaces replaced by underscores. Deterministic per input triple.
pub fn drive_link_for(client_name: &str, request_id: &str, document_name: &str) -> String {
    format!(
        "{DRIVE_LINK_BASE}/{}/{request_id}/{}",
        client_name.replace(' ', "_"),
        document_name.replace(' ', "_"),
    )
}
