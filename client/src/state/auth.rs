//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Published by the session store and read by the route guard and
//! identity-aware components through an `RwSignal<AuthState>` in context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::SessionRecord;

/// Authentication state tracking the current user and loading status.
///
/// `loading` starts `true` and drops to `false` once the session store has
/// tried to restore a saved session.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionRecord>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Display name of the signed-in user, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}
