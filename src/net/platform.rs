//! Capability contracts for the identity provider, sign-in widget and object
//! storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers are written against these traits so the browser build can plug
//! in the Firebase bridge while native tests use in-memory fakes.

#[cfg(test)]
#[path = "platform_test.rs"]
mod platform_test;

use std::rc::Rc;

use futures::future::LocalBoxFuture;

use super::error::PlatformError;
use super::types::{Session, TransferEvent, WidgetConfig};

/// Callback invoked with the current session on every auth transition.
pub type SessionListener = Box<dyn FnMut(Option<Session>)>;

/// Callback invoked for every notification of one transfer.
pub type TransferObserver = Rc<dyn Fn(TransferEvent)>;

/// Live registration with an external notification source.
///
/// Dropping the subscription releases it; the release hook runs exactly once.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Identity provider session stream and sign-out.
pub trait IdentityProvider {
    /// Register `listener`. It is called once right away with the current
    /// session (possibly `None`) and again on every sign-in/sign-out.
    fn subscribe(&self, listener: SessionListener) -> Subscription;

    /// Request sign-out. The outcome is observed through the subscription.
    fn sign_out(&self);
}

/// Prebuilt widget that owns the credential-entry DOM subtree.
///
/// Not re-entrant: every `mount` must be preceded by an `unmount` of the
/// previous instance.
pub trait SignInWidget {
    /// Render into `container_selector`. `on_success` fires after a
    /// successful sign-in; the provider's default redirect is suppressed.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::WidgetMount`] if the widget refuses to start.
    fn mount(
        &self,
        container_selector: &str,
        config: &WidgetConfig,
        on_success: Rc<dyn Fn()>,
    ) -> Result<(), PlatformError>;

    /// Tear down the current instance, if any.
    fn unmount(&self);
}

/// Handle to an in-progress chunked upload.
pub trait TransferHandle {
    /// Abort the transfer. Further events from it may still arrive and must
    /// be discarded by the caller.
    fn cancel(&self);

    /// Resolve the public retrieval URL of the uploaded object.
    fn resolve_download_url(&self) -> LocalBoxFuture<'static, Result<String, PlatformError>>;
}

/// Remote object storage.
pub trait ObjectStorage {
    /// Local file content accepted by this backend.
    type Body;
    type Transfer: TransferHandle;

    /// Start uploading `body` to `path`. Returns immediately; outcome is
    /// delivered through `observer`.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Transfer`] if the transfer could not be started.
    fn start_transfer(
        &self,
        path: &str,
        body: &Self::Body,
        observer: TransferObserver,
    ) -> Result<Self::Transfer, PlatformError>;
}
