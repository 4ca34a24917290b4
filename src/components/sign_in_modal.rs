//! Sign-in dialog hosting the prebuilt widget.
//!
//! The widget is started in two delayed steps per open cycle: first the
//! container is marked ready, then the widget is rendered into it. Closing the
//! dialog (close button, backdrop, Escape, or a successful sign-in) resets the
//! modal and tears the widget down so the next open gets a fresh instance.

use leptos::prelude::*;

use crate::state::modal::ModalState;
use crate::util::sign_in::{SIGN_IN_LABEL, WIDGET_CONTAINER_ID};

#[component]
pub fn SignInModal() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();

    // Phase and ticket only; re-notifications with identical state don't
    // reschedule timers.
    let cycle = Memo::new(move |_| {
        let state = modal.get();
        (state.phase(), state.open_seq)
    });

    #[cfg(feature = "csr")]
    {
        use std::rc::Rc;

        use gloo_timers::callback::Timeout;

        use crate::net::firebase::FirebaseSignInWidget;
        use crate::state::modal::{ModalPhase, WIDGET_MOUNT_DELAY_MS, WIDGET_RENDER_DELAY_MS};
        use crate::util::sign_in::{release_widget, render_widget};

        let widget = StoredValue::new_local(FirebaseSignInWidget::default());

        Effect::new(move || {
            let (phase, ticket) = cycle.get();
            match phase {
                ModalPhase::OpeningPending => {
                    Timeout::new(WIDGET_MOUNT_DELAY_MS, move || {
                        modal.maybe_update(|m| m.mark_widget_mounted(ticket));
                    })
                    .forget();
                }
                ModalPhase::OpenReady => {
                    Timeout::new(WIDGET_RENDER_DELAY_MS, move || {
                        let on_success: Rc<dyn Fn()> = Rc::new(move || modal.update(ModalState::close));
                        let current = modal.get_untracked();
                        widget.try_with_value(|w| render_widget(&current, ticket, w, on_success));
                    })
                    .forget();
                }
                ModalPhase::Closed => {
                    let current = modal.get_untracked();
                    widget.try_with_value(|w| release_widget(&current, w));
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = cycle;

    // Refocus once per open cycle; the widget's own inputs keep focus after.
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    let focus_request = Memo::new(move |_| modal.with(ModalState::focus_request));
    Effect::new(move || {
        if focus_request.get().is_none() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            if let Some(dialog) = dialog_ref.get() {
                let _ = dialog.focus();
            }
        }
    });

    let on_backdrop = move |_| modal.update(ModalState::close);
    let on_close_click = move |_| modal.update(ModalState::close);
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            modal.update(ModalState::close);
        }
    });

    view! {
        <Show when=move || modal.get().is_open>
            <div class="dialog-backdrop" on:click=on_backdrop>
                <div
                    class="dialog dialog--sign-in"
                    node_ref=dialog_ref
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                    tabindex="0"
                >
                    <div class="dialog__header">
                        <h2 class="dialog__title">{SIGN_IN_LABEL}</h2>
                        <button class="dialog__close" on:click=on_close_click title="Close">
                            "✕"
                        </button>
                    </div>
                    <div id=WIDGET_CONTAINER_ID class="dialog__widget"></div>
                </div>
            </div>
        </Show>
    }
}
