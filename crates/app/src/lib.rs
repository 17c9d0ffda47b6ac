//! Session-scoped application services.
//!
//! Wires the domain logic to the persistence layer: an [`state::AppState`]
//! holds the live collections, a [`session::Session`] carries the active
//! user, and the service modules implement the user-facing operations with
//! role gates and validation applied before any mutation.

pub mod config;
pub mod error;
pub mod reminder;
pub mod services;
pub mod session;
pub mod state;
