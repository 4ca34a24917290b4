//! Sign-in modal visibility and widget mount lifecycle.
//!
//! DESIGN
//! ======
//! The widget owns its DOM subtree imperatively, so it is torn down on every
//! close and rebuilt on every open. Opening is split in two steps: the dialog
//! becomes visible first, and only after a short delay (once the container
//! element exists) is the widget marked mounted.
//!
//! Each open hands out a ticket. Delayed steps carry the ticket they were
//! scheduled with and are ignored if the dialog was closed or reopened since.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Delay between opening the dialog and marking the widget container ready.
pub const WIDGET_MOUNT_DELAY_MS: u32 = 50;

/// Delay between the container becoming ready and starting the widget.
pub const WIDGET_RENDER_DELAY_MS: u32 = 100;

/// Lifecycle phase derived from [`ModalState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    /// Dialog visible, widget container not yet handed to the widget.
    OpeningPending,
    /// Dialog visible and widget mounted.
    OpenReady,
}

/// Modal dialog state.
///
/// `is_widget_mounted` is never true while `is_open` is false.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
    pub is_widget_mounted: bool,
    /// Ticket of the current (or most recent) open cycle.
    pub open_seq: u64,
}

impl ModalState {
    pub fn phase(&self) -> ModalPhase {
        match (self.is_open, self.is_widget_mounted) {
            (false, _) => ModalPhase::Closed,
            (true, false) => ModalPhase::OpeningPending,
            (true, true) => ModalPhase::OpenReady,
        }
    }

    /// Enter `OpeningPending` and return the ticket for the delayed steps.
    ///
    /// Opening an already open dialog restarts the cycle with a fresh ticket.
    pub fn open(&mut self) -> u64 {
        self.open_seq += 1;
        self.is_open = true;
        self.is_widget_mounted = false;
        self.open_seq
    }

    /// Any state to `Closed`.
    pub fn close(&mut self) {
        self.is_open = false;
        self.is_widget_mounted = false;
    }

    /// Open cycle whose dialog should take keyboard focus, so Escape works
    /// without clicking into it first.
    pub fn focus_request(&self) -> Option<u64> {
        self.is_open.then_some(self.open_seq)
    }

    /// `OpeningPending` to `OpenReady` once the mount delay for `ticket` has
    /// elapsed. Returns whether the transition happened.
    pub fn mark_widget_mounted(&mut self, ticket: u64) -> bool {
        if !self.is_open || ticket != self.open_seq {
            return false;
        }
        self.is_widget_mounted = true;
        true
    }

    /// Whether the delayed widget start scheduled for `ticket` should still run.
    pub fn should_render_widget(&self, ticket: u64) -> bool {
        self.is_open && self.is_widget_mounted && ticket == self.open_seq
    }
}
