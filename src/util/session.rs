//! Signed-in user lookup from the browser session.
//!
//! The login flow (outside this crate) stores the user as JSON under the
//! `user` key in `localStorage`. Requires a browser environment.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "user";

/// Decode a stored session user, ignoring malformed entries.
pub fn parse_user(raw: &str) -> Option<User> {
    match serde_json::from_str::<User>(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("ignoring malformed session user: {e}");
            None
        }
    }
}

/// Read the current user from `localStorage`.
///
/// Returns `None` outside the browser or when no user is stored.
pub fn read_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        parse_user(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
