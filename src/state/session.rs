//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the session watcher, which is the only writer. The header trigger
//! and upload panel read it to pick labels and gate uploads.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Session;

/// Last session delivered by the identity provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// True until the first notification arrives.
    pub loading: bool,
}

impl SessionState {
    /// State before the provider has reported anything.
    pub fn pending() -> Self {
        Self { session: None, loading: true }
    }

    /// Replace the current session with the latest notification.
    pub fn apply(&mut self, session: Option<Session>) {
        self.session = session;
        self.loading = false;
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.uid.as_str())
    }
}
