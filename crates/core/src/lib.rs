//! Domain logic for the compliance-document tracking platform.
//!
//! This crate has zero internal dependencies (no storage, no I/O) so it can
//! be used by the repository layer, the session services, and any future CLI
//! tooling. It owns the entity definitions, the document and request
//! lifecycle state machines, role-scoped visibility filtering, template
//! instantiation, and the derived expiry view.

pub mod client;
pub mod document;
pub mod document_type;
pub mod error;
pub mod expiry;
pub mod naming;
pub mod portal;
pub mod request;
pub mod roles;
pub mod saved_view;
pub mod search;
pub mod status;
pub mod template;
pub mod types;
pub mod user;
pub mod visibility;
