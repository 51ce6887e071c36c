//! Bearer-token lookup for authenticated API calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow (outside this crate) leaves the token in `localStorage`.
//! A missing token means "not signed in": callers skip their request
//! silently instead of redirecting or surfacing an error.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Read the bearer token from `localStorage`. `None` outside the browser.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(TOKEN_STORAGE_KEY).ok().flatten();
        normalize_token(raw.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Treat blank values (and the literal strings a careless `setItem` leaves
/// behind) as no token.
pub fn normalize_token(raw: Option<&str>) -> Option<String> {
    let token = raw?.trim();
    if token.is_empty() || token == "null" || token == "undefined" {
        return None;
    }
    Some(token.to_owned())
}
