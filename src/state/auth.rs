//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once at application start (authenticate, conditionally
//! refresh) and provided via context; route guards and user-aware
//! components read it instead of any global.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserResponse;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub loading: bool,
}

impl AuthState {
    /// Whether a user session has been established.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
