//! Upload controller: starts transfers and routes their events into the
//! shared `UploadTracker`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The upload panel owns one controller. Every attempt is tagged with the
//! tracker's generation; a superseded transfer is cancelled and its late
//! events are discarded by the tracker. On completion the retrieval URL is
//! resolved in a detached task and only logged.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;

use crate::net::error::PlatformError;
use crate::net::platform::{ObjectStorage, TransferHandle, TransferObserver};
use crate::net::types::{SelectedFile, Session, TransferEvent};
use crate::state::upload::{EventOutcome, UploadTracker};

/// Shared cell holding the tracker; a reactive signal in the app, a plain
/// `RefCell` in tests.
pub trait TrackerCell: Clone + 'static {
    /// Mutate the tracker. `None` means the cell is gone (owner disposed).
    fn update_tracker<R>(&self, f: impl FnOnce(&mut UploadTracker) -> R) -> Option<R>;
}

impl TrackerCell for RwSignal<UploadTracker> {
    fn update_tracker<R>(&self, f: impl FnOnce(&mut UploadTracker) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl TrackerCell for Rc<RefCell<UploadTracker>> {
    fn update_tracker<R>(&self, f: impl FnOnce(&mut UploadTracker) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

type CurrentTransfer<T> = Rc<RefCell<Option<(u64, Rc<T>)>>>;

pub struct UploadController<S: ObjectStorage, C> {
    storage: S,
    tracker: C,
    current: CurrentTransfer<S::Transfer>,
}

impl<S, C> UploadController<S, C>
where
    S: ObjectStorage,
    S::Transfer: 'static,
    C: TrackerCell,
{
    pub fn new(storage: S, tracker: C) -> Self {
        Self { storage, tracker, current: Rc::new(RefCell::new(None)) }
    }

    /// Record a new selection. Resets upload state and cancels any transfer
    /// still running for the previous selection.
    pub fn select_file(&self, file: Option<SelectedFile>) {
        self.cancel_current();
        self.tracker.update_tracker(|t| t.select_file(file));
    }

    /// Start uploading `body` for the selected file as `session`'s user.
    ///
    /// A missing body, selection, or session is a silent no-op. Returns the
    /// attempt generation when a transfer was started.
    pub fn start(&self, body: Option<&S::Body>, session: Option<&Session>) -> Option<u64> {
        let body = body?;
        let plan = self.tracker.update_tracker(|t| t.begin(session)).flatten()?;
        self.cancel_current();

        let observer = self.observer(plan.attempt);
        match self.storage.start_transfer(&plan.path, body, observer) {
            Ok(handle) => {
                *self.current.borrow_mut() = Some((plan.attempt, Rc::new(handle)));
                log::debug!("upload attempt {} started for {}", plan.attempt, plan.path);
            }
            Err(e) => {
                log::warn!("upload error: {e}");
                self.tracker
                    .update_tracker(|t| t.apply(plan.attempt, &TransferEvent::Failed(e.to_string())));
            }
        }
        Some(plan.attempt)
    }

    fn cancel_current(&self) {
        let previous = self.current.borrow_mut().take();
        if let Some((attempt, handle)) = previous {
            log::debug!("cancelling superseded upload attempt {attempt}");
            handle.cancel();
        }
    }

    fn observer(&self, attempt: u64) -> TransferObserver {
        let tracker = self.tracker.clone();
        let current = Rc::clone(&self.current);
        Rc::new(move |event: TransferEvent| {
            match tracker.update_tracker(|t| t.apply(attempt, &event)) {
                Some(EventOutcome::Applied) => {}
                Some(outcome) => {
                    log::debug!("discarding transfer event for attempt {attempt}: {outcome:?}");
                    return;
                }
                None => return,
            }
            match event {
                TransferEvent::Progress { .. } => {}
                TransferEvent::Failed(message) => {
                    log::warn!("upload error: {message}");
                    current.borrow_mut().take();
                }
                TransferEvent::Completed => {
                    let finished = current.borrow_mut().take();
                    if let Some((_, handle)) = finished {
                        detach(log_download_url(handle.resolve_download_url()));
                    }
                }
            }
        })
    }
}

/// Abandon the current attempt when the owning scope is disposed: the running
/// transfer is cancelled and the tracker forgets the selection.
pub fn abandon_on_cleanup<S, C>(controller: StoredValue<UploadController<S, C>, LocalStorage>)
where
    S: ObjectStorage + 'static,
    S::Transfer: 'static,
    C: TrackerCell,
{
    on_cleanup(move || {
        controller.try_with_value(|c| c.select_file(None));
    });
}

async fn log_download_url(resolve: impl Future<Output = Result<String, PlatformError>>) {
    match resolve.await {
        Ok(url) => log::info!("file available at {url}"),
        Err(e) => log::warn!("{e}"),
    }
}

/// Run a fire-and-forget continuation.
fn detach(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(task);
    }
    #[cfg(not(feature = "csr"))]
    {
        futures::executor::block_on(task);
    }
}
