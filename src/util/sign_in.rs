//! Sign-in trigger and widget lifecycle helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header trigger either signs out or opens the modal. The modal component
//! drives the delayed mount steps through `ModalState` and calls
//! [`render_widget`] once the container exists. The widget container is owned
//! exclusively by the modal while mounted.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use std::rc::Rc;

use crate::net::platform::{IdentityProvider, SignInWidget};
use crate::net::types::WidgetConfig;
use crate::state::modal::ModalState;

/// DOM id of the element the widget renders into.
pub const WIDGET_CONTAINER_ID: &str = "auth-widget-container";

/// Title of the sign-in dialog, also the signed-out trigger label.
pub const SIGN_IN_LABEL: &str = "Sign In / Sign Up";

pub const SIGN_OUT_LABEL: &str = "Sign Out";

/// What clicking the header trigger does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerAction {
    OpenModal,
    SignOut,
}

pub fn trigger_action(signed_in: bool) -> TriggerAction {
    if signed_in { TriggerAction::SignOut } else { TriggerAction::OpenModal }
}

pub fn trigger_label(signed_in: bool) -> &'static str {
    if signed_in { SIGN_OUT_LABEL } else { SIGN_IN_LABEL }
}

pub fn widget_container_selector() -> String {
    format!("#{WIDGET_CONTAINER_ID}")
}

/// Handle a trigger click.
///
/// Signed in: request sign-out and leave the modal alone; the new session is
/// observed through the watcher. Signed out: open the modal and return the
/// ticket for the delayed mount steps.
pub fn handle_trigger<P>(signed_in: bool, identity: &P, modal: &mut ModalState) -> Option<u64>
where
    P: IdentityProvider + ?Sized,
{
    match trigger_action(signed_in) {
        TriggerAction::SignOut => {
            identity.sign_out();
            None
        }
        TriggerAction::OpenModal => Some(modal.open()),
    }
}

/// Result of a delayed widget start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetRender {
    Mounted,
    /// Modal closed or reopened since the ticket was issued.
    Skipped,
    /// Widget refused to start; logged, modal state unchanged.
    Failed,
}

/// Start a fresh widget instance for `ticket` if the modal is still in the
/// `OpenReady` phase of that open cycle.
///
/// Any previous instance is torn down first. A mount failure is logged and
/// otherwise ignored.
pub fn render_widget<W>(modal: &ModalState, ticket: u64, widget: &W, on_success: Rc<dyn Fn()>) -> WidgetRender
where
    W: SignInWidget + ?Sized,
{
    if !modal.should_render_widget(ticket) {
        return WidgetRender::Skipped;
    }
    widget.unmount();
    match widget.mount(&widget_container_selector(), &WidgetConfig::default(), on_success) {
        Ok(()) => WidgetRender::Mounted,
        Err(e) => {
            log::error!("error starting sign-in widget: {e}");
            WidgetRender::Failed
        }
    }
}

/// Release the widget once the modal has closed.
///
/// Returns whether an unmount was issued.
pub fn release_widget<W>(modal: &ModalState, widget: &W) -> bool
where
    W: SignInWidget + ?Sized,
{
    if modal.is_open {
        return false;
    }
    widget.unmount();
    true
}
