//! Portal token generation and resolution.
//!
//! A portal token is a bearer credential scoping a client to exactly one
//! document request. Tokens are random alphanumeric strings long enough
//! that collisions are practically impossible; uniqueness against the live
//! request set is still checked at generation time.

use std::collections::HashSet;

use rand::Rng;

use crate::request::DocumentRequest;

/// Length of a generated portal token.
pub const TOKEN_LENGTH: usize = 24;

/// Query parameter carrying the token in a shared portal link.
pub const PORTAL_QUERY_PARAM: &str = "portal_token";

/// Generate a random alphanumeric portal token.
pub fn generate_token() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Generate a token distinct from every token in `existing`.
pub fn generate_unique_token(existing: &HashSet<String>) -> String {
    loop {
        let token = generate_token();
        if !existing.contains(&token) {
            return token;
        }
    }
}

/// Format the shareable portal link for a token.
pub fn portal_link(origin: &str, token: &str) -> String {
    format!("{origin}?{PORTAL_QUERY_PARAM}={token}")
}

/// Resolve a bearer token to its request.
///
/// `None` is the "invalid or expired link" condition and must be surfaced
/// to the user, never treated as a crash.
pub fn resolve_token<'a>(
    requests: &'a [DocumentRequest],
    token: &str,
) -> Option<&'a DocumentRequest> {
    requests.iter().find(|r| r.portal_token == token)
}
