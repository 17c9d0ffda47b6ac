//! User-facing operations, one module per area of the product.

pub mod clients;
pub mod dashboard;
pub mod documents;
pub mod portal;
pub mod requests;
pub mod search;
pub mod templates;
pub mod users;
pub mod views;
