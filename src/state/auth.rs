//! Signed-in user context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Populated from the browser session at startup and read by every screen
//! for role gating and message ownership.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Id, Role, User};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    pub fn role(&self) -> Role {
        self.user.as_ref().map_or(Role::Unknown, |u| u.role)
    }

    pub fn user_id(&self) -> Option<Id> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn is_privileged(&self) -> bool {
        self.role().is_privileged()
    }

    pub fn is_customer(&self) -> bool {
        self.role().is_customer()
    }

    /// Name for greetings; `"User"` when unknown.
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .and_then(|u| u.full_name.clone())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "User".to_owned())
    }
}
