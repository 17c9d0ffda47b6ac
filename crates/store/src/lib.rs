//! Persistence layer: typed per-collection repositories over a string-keyed
//! JSON store.
//!
//! Each collection is read once at startup (missing or unreadable data
//! falls back to a supplied default) and written back after every change.
//! Writes are fire-and-forget: a failure is logged and the in-memory state
//! stays authoritative for the session.

pub mod backend;
pub mod keys;
pub mod repository;
pub mod seed;

pub use backend::{JsonFileBackend, MemoryBackend, StorageBackend, StoreError};
pub use repository::Store;
