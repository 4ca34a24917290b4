//! Single owner of the identity provider's session subscription.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root starts one watcher for its lifetime and feeds every
//! notification into `SessionState`. Nothing else writes the session.

#[cfg(test)]
#[path = "session_watcher_test.rs"]
mod session_watcher_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::net::platform::{IdentityProvider, Subscription};
use crate::net::types::Session;

/// Live session subscription. Dropping the watcher releases it, after which
/// no further notifications reach the sink.
#[derive(Debug)]
pub struct SessionWatcher {
    alive: Rc<Cell<bool>>,
    _subscription: Subscription,
}

impl SessionWatcher {
    /// Register exactly one subscription with `provider`. The provider calls
    /// back immediately with the current session and on every transition.
    pub fn start<P, F>(provider: &P, mut on_change: F) -> Self
    where
        P: IdentityProvider + ?Sized,
        F: FnMut(Option<Session>) + 'static,
    {
        let alive = Rc::new(Cell::new(true));
        let gate = Rc::clone(&alive);
        let subscription = provider.subscribe(Box::new(move |session: Option<Session>| {
            if !gate.get() {
                return;
            }
            if session.is_some() {
                log::info!("auth state changed: signed in");
            } else {
                log::info!("auth state changed: signed out");
            }
            on_change(session);
        }));
        Self { alive, _subscription: subscription }
    }
}

impl Drop for SessionWatcher {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}
