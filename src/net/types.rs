//! Shared DTOs for the identity and storage collaborators.
//!
//! DESIGN
//! ======
//! These types describe only what the client consumes from the platform SDK.
//! Sessions arrive from the JS bridge as JSON, and widget configuration leaves
//! it as JSON, so both sides derive serde with camelCase field names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated identity handle issued by the identity provider.
///
/// The client never constructs or mutates a session on its own; it only
/// observes the ones delivered through the session subscription.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Stable user identifier, used to namespace storage paths.
    pub uid: String,
}

/// Metadata for a user-chosen local file.
///
/// The byte content stays with the platform-specific body (a browser `File`
/// in the wasm build) and is handed to storage separately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

/// Notifications emitted by a live transfer handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransferEvent {
    /// Cumulative bytes transferred out of the total.
    Progress { bytes_transferred: u64, total_bytes: u64 },
    /// Transport failure with the provider's diagnostic message.
    Failed(String),
    Completed,
}

/// Sign-in methods the prebuilt widget can offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignInMethod {
    Google,
    Email,
}

/// How the widget runs provider-specific sign-in. Only the pop-up flow is
/// used; the redirect flow would reload the page and lose upload state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignInFlow {
    #[default]
    Popup,
}

/// Configuration passed to the widget each time it is mounted.
///
/// The success callback is supplied separately to the mount call since it
/// cannot cross the JSON boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    pub sign_in_methods: Vec<SignInMethod>,
    pub flow: SignInFlow,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            sign_in_methods: vec![SignInMethod::Google, SignInMethod::Email],
            flow: SignInFlow::Popup,
        }
    }
}

/// Parse the JSON session payload delivered by the bridge.
///
/// `None` or an unparseable payload both mean "no session".
pub fn parse_session(payload: Option<&str>) -> Option<Session> {
    let raw = payload?;
    match serde_json::from_str(raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("discarding malformed session payload: {e}");
            None
        }
    }
}
