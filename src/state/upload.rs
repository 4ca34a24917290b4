//! Upload progress state and attempt bookkeeping.
//!
//! DESIGN
//! ======
//! Each upload attempt gets a generation number. Transfer callbacks carry the
//! generation they were registered with, and the tracker drops any event whose
//! generation is no longer current or whose attempt already reached a
//! terminal state. Selecting a new file also bumps the generation, so a
//! superseded transfer can never write into the fresh state.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::net::types::{SelectedFile, Session, TransferEvent};

/// User-facing message shown when a transfer fails.
pub const UPLOAD_FAILED_MESSAGE: &str = "An error occurred during upload. Please try again.";

/// Storage prefix under which every user's objects live.
pub const UPLOAD_PREFIX: &str = "uploads";

/// Observable state of the current upload attempt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    /// Percentage in `[0, 100]`, non-decreasing within one attempt.
    pub progress_percent: f64,
    pub error: Option<String>,
    pub completed: bool,
}

impl UploadState {
    /// Progress bar is visible only while strictly between 0% and 100%.
    pub fn shows_progress_bar(&self) -> bool {
        self.progress_percent > 0.0 && self.progress_percent < 100.0
    }
}

/// What the tracker did with an incoming transfer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    Applied,
    /// Event belongs to a superseded attempt.
    Stale,
    /// Attempt already failed or completed.
    AfterTerminal,
}

/// Everything needed to start the transfer for a fresh attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadPlan {
    pub attempt: u64,
    pub path: String,
}

/// Selected file plus the state of the attempt currently allowed to report.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadTracker {
    pub selected: Option<SelectedFile>,
    pub state: UploadState,
    attempt: u64,
    in_flight: bool,
}

impl UploadTracker {
    /// Generation of the attempt currently allowed to report.
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Replace the selection and reset state. Any in-flight attempt becomes
    /// stale.
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.selected = file;
        self.state = UploadState::default();
        self.attempt += 1;
        self.in_flight = false;
    }

    /// Whether the upload action should be enabled.
    pub fn can_upload(&self) -> bool {
        self.selected.is_some() && !self.in_flight && !self.state.completed
    }

    /// Start a new attempt for the selected file.
    ///
    /// Returns `None` without touching any state when no file is selected or
    /// no session is present.
    pub fn begin(&mut self, session: Option<&Session>) -> Option<UploadPlan> {
        let (Some(file), Some(session)) = (self.selected.as_ref(), session) else {
            return None;
        };
        let path = object_path(&session.uid, &file.name);
        self.state = UploadState::default();
        self.attempt += 1;
        self.in_flight = true;
        Some(UploadPlan { attempt: self.attempt, path })
    }

    /// Apply an event reported for `attempt`.
    pub fn apply(&mut self, attempt: u64, event: &TransferEvent) -> EventOutcome {
        if attempt != self.attempt {
            return EventOutcome::Stale;
        }
        if !self.in_flight {
            return EventOutcome::AfterTerminal;
        }
        match event {
            TransferEvent::Progress { bytes_transferred, total_bytes } => {
                let pct = progress_percent(*bytes_transferred, *total_bytes);
                self.state.progress_percent = self.state.progress_percent.max(pct);
            }
            TransferEvent::Failed(_) => {
                self.state.error = Some(UPLOAD_FAILED_MESSAGE.to_owned());
                self.in_flight = false;
            }
            TransferEvent::Completed => {
                self.state.progress_percent = 100.0;
                self.state.completed = true;
                self.in_flight = false;
            }
        }
        EventOutcome::Applied
    }
}

/// Remote object path for a user's file. Same user + same name overwrites.
pub fn object_path(user_id: &str, file_name: &str) -> String {
    format!("{UPLOAD_PREFIX}/{user_id}/{file_name}")
}

/// Map cumulative bytes to a percentage clamped to `[0, 100]`.
///
/// An empty file counts as fully transferred.
#[allow(clippy::cast_precision_loss)]
pub fn progress_percent(bytes_transferred: u64, total_bytes: u64) -> f64 {
    if total_bytes == 0 {
        return 100.0;
    }
    let pct = bytes_transferred as f64 / total_bytes as f64 * 100.0;
    pct.clamp(0.0, 100.0)
}
