//! In-memory platform fakes shared by unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::net::error::PlatformError;
use crate::net::platform::{
    IdentityProvider, ObjectStorage, SessionListener, SignInWidget, Subscription, TransferHandle,
    TransferObserver,
};
use crate::net::types::{Session, TransferEvent, WidgetConfig};

pub fn session(uid: &str) -> Session {
    Session { uid: uid.to_owned() }
}

// =============================================================
// Identity
// =============================================================

#[derive(Default)]
struct IdentityInner {
    current: Option<Session>,
    listeners: Vec<(u64, SessionListener)>,
    next_id: u64,
    sign_out_calls: usize,
    leaky: bool,
}

/// Identity provider that delivers notifications synchronously on `emit`.
#[derive(Clone, Default)]
pub struct FakeIdentity {
    inner: Rc<RefCell<IdentityInner>>,
}

impl FakeIdentity {
    pub fn signed_in(session: Session) -> Self {
        let identity = Self::default();
        identity.inner.borrow_mut().current = Some(session);
        identity
    }

    /// Keep listeners registered after release, to model a provider that
    /// still calls back late.
    pub fn leaky(self) -> Self {
        self.inner.borrow_mut().leaky = true;
        self
    }

    pub fn active_listeners(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn sign_out_calls(&self) -> usize {
        self.inner.borrow().sign_out_calls
    }

    pub fn emit(&self, session: Option<Session>) {
        self.inner.borrow_mut().current = session.clone();
        let mut listeners = std::mem::take(&mut self.inner.borrow_mut().listeners);
        for (_, listener) in &mut listeners {
            listener(session.clone());
        }
        let mut inner = self.inner.borrow_mut();
        listeners.append(&mut inner.listeners);
        inner.listeners = listeners;
    }
}

impl IdentityProvider for FakeIdentity {
    fn subscribe(&self, mut listener: SessionListener) -> Subscription {
        let current = self.inner.borrow().current.clone();
        listener(current);

        let id = {
            let mut inner = self.inner.borrow_mut();
            inner.next_id += 1;
            let id = inner.next_id;
            inner.listeners.push((id, listener));
            id
        };

        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                let mut inner = inner.borrow_mut();
                if !inner.leaky {
                    inner.listeners.retain(|(lid, _)| *lid != id);
                }
            }
        })
    }

    fn sign_out(&self) {
        self.inner.borrow_mut().sign_out_calls += 1;
        self.emit(None);
    }
}

// =============================================================
// Widget
// =============================================================

#[derive(Default)]
struct WidgetInner {
    mounts: Vec<(String, WidgetConfig)>,
    unmounts: usize,
    mounted: bool,
    overlapping_mounts: usize,
    on_success: Option<Rc<dyn Fn()>>,
    fail_with: Option<String>,
}

/// Sign-in widget that records mounts and lets tests fire the success callback.
#[derive(Default)]
pub struct FakeWidget {
    inner: RefCell<WidgetInner>,
}

impl FakeWidget {
    pub fn failing(message: &str) -> Self {
        let widget = Self::default();
        widget.inner.borrow_mut().fail_with = Some(message.to_owned());
        widget
    }

    pub fn mounts(&self) -> Vec<(String, WidgetConfig)> {
        self.inner.borrow().mounts.clone()
    }

    pub fn unmounts(&self) -> usize {
        self.inner.borrow().unmounts
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().mounted
    }

    pub fn overlapping_mounts(&self) -> usize {
        self.inner.borrow().overlapping_mounts
    }

    pub fn complete_sign_in(&self) {
        let callback = self.inner.borrow().on_success.clone();
        if let Some(callback) = callback {
            callback();
        }
    }
}

impl SignInWidget for FakeWidget {
    fn mount(
        &self,
        container_selector: &str,
        config: &WidgetConfig,
        on_success: Rc<dyn Fn()>,
    ) -> Result<(), PlatformError> {
        let mut inner = self.inner.borrow_mut();
        if let Some(message) = inner.fail_with.clone() {
            return Err(PlatformError::WidgetMount(message));
        }
        if inner.mounted {
            inner.overlapping_mounts += 1;
        }
        inner.mounts.push((container_selector.to_owned(), config.clone()));
        inner.mounted = true;
        inner.on_success = Some(on_success);
        Ok(())
    }

    fn unmount(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.unmounts += 1;
        inner.mounted = false;
        inner.on_success = None;
    }
}

// =============================================================
// Storage
// =============================================================

pub struct FakeTransfer {
    cancelled: Rc<Cell<bool>>,
    url_requests: Rc<Cell<usize>>,
    url: Result<String, PlatformError>,
}

impl TransferHandle for FakeTransfer {
    fn cancel(&self) {
        self.cancelled.set(true);
    }

    fn resolve_download_url(&self) -> LocalBoxFuture<'static, Result<String, PlatformError>> {
        self.url_requests.set(self.url_requests.get() + 1);
        Box::pin(futures::future::ready(self.url.clone()))
    }
}

struct StartedTransfer {
    path: String,
    body: Vec<u8>,
    observer: TransferObserver,
    cancelled: Rc<Cell<bool>>,
}

struct StorageInner {
    started: Vec<StartedTransfer>,
    refuse_start: bool,
    url: Result<String, PlatformError>,
    url_requests: Rc<Cell<usize>>,
}

/// Object storage whose transfers report only when a test emits events.
#[derive(Clone)]
pub struct FakeStorage {
    inner: Rc<RefCell<StorageInner>>,
}

impl Default for FakeStorage {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(StorageInner {
                started: Vec::new(),
                refuse_start: false,
                url: Ok("https://storage.example/object".to_owned()),
                url_requests: Rc::new(Cell::new(0)),
            })),
        }
    }
}

impl FakeStorage {
    pub fn refusing() -> Self {
        let storage = Self::default();
        storage.inner.borrow_mut().refuse_start = true;
        storage
    }

    pub fn with_url_failure(message: &str) -> Self {
        let storage = Self::default();
        storage.inner.borrow_mut().url = Err(PlatformError::UrlResolution(message.to_owned()));
        storage
    }

    pub fn started(&self) -> usize {
        self.inner.borrow().started.len()
    }

    pub fn path(&self, index: usize) -> String {
        self.inner.borrow().started[index].path.clone()
    }

    pub fn body(&self, index: usize) -> Vec<u8> {
        self.inner.borrow().started[index].body.clone()
    }

    pub fn is_cancelled(&self, index: usize) -> bool {
        self.inner.borrow().started[index].cancelled.get()
    }

    pub fn url_requests(&self) -> usize {
        self.inner.borrow().url_requests.get()
    }

    pub fn emit(&self, index: usize, event: TransferEvent) {
        let observer = Rc::clone(&self.inner.borrow().started[index].observer);
        observer(event);
    }
}

impl ObjectStorage for FakeStorage {
    type Body = Vec<u8>;
    type Transfer = FakeTransfer;

    fn start_transfer(
        &self,
        path: &str,
        body: &Self::Body,
        observer: TransferObserver,
    ) -> Result<Self::Transfer, PlatformError> {
        let mut inner = self.inner.borrow_mut();
        if inner.refuse_start {
            return Err(PlatformError::Transfer("bucket unavailable".to_owned()));
        }
        let cancelled = Rc::new(Cell::new(false));
        inner.started.push(StartedTransfer {
            path: path.to_owned(),
            body: body.clone(),
            observer,
            cancelled: Rc::clone(&cancelled),
        });
        Ok(FakeTransfer {
            cancelled,
            url_requests: Rc::clone(&inner.url_requests),
            url: inner.url.clone(),
        })
    }
}
