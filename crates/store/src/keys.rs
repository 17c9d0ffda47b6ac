//! Well-known storage key constants.
//!
//! These must match the keys written by earlier releases so existing data
//! keeps loading.

pub const USERS: &str = "users";
pub const CLIENTS: &str = "clients";
pub const TEMPLATES: &str = "templates";
pub const DOCUMENTS: &str = "documents";
pub const REQUESTS: &str = "requests";
pub const SAVED_VIEWS: &str = "savedViews";
pub const CURRENT_USER: &str = "currentUser";
