//! Header trigger that opens the sign-in modal or signs out.

use leptos::prelude::*;

use crate::state::modal::ModalState;
use crate::state::session::SessionState;
use crate::util::sign_in::trigger_label;

/// Sign-in / sign-out toggle.
///
/// Signed out, a click opens the modal; the modal schedules the widget itself.
/// Signed in, a click requests sign-out and the label flips once the session
/// watcher observes it.
#[component]
pub fn SignInButton() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let modal = expect_context::<RwSignal<ModalState>>();

    let signed_in = move || session.get().is_signed_in();
    let on_click = move |_| {
        let signed_in = session.get_untracked().is_signed_in();
        #[cfg(feature = "csr")]
        {
            let identity = crate::net::firebase::FirebaseIdentity;
            modal.maybe_update(|m| {
                crate::util::sign_in::handle_trigger(signed_in, &identity, m).is_some()
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            if !signed_in {
                modal.update(|m| {
                    m.open();
                });
            }
        }
    };

    view! {
        <button
            class=move || if signed_in() { "btn btn--outline" } else { "btn btn--primary" }
            on:click=on_click
        >
            {move || trigger_label(signed_in())}
        </button>
    }
}
