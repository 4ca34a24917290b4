//! File picker, upload action and progress reporting for signed-in users.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::upload::UploadTracker;

pub const UPLOAD_COMPLETED_MESSAGE: &str = "Upload completed successfully!";

/// Upload card.
///
/// Owns the upload controller and the browser `File` for the current
/// selection. Unmounting (e.g. on sign-out) abandons any running transfer.
#[component]
pub fn UploadPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let upload = expect_context::<RwSignal<UploadTracker>>();

    #[cfg(feature = "csr")]
    let (controller, body) = {
        use crate::net::firebase::FirebaseStorage;
        use crate::util::upload::{UploadController, abandon_on_cleanup};

        let controller = StoredValue::new_local(UploadController::new(FirebaseStorage, upload));
        let body = StoredValue::new_local(None::<web_sys::File>);
        abandon_on_cleanup(controller);
        (controller, body)
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            use crate::net::types::SelectedFile;

            let file = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let selected = file
                .as_ref()
                .map(|f| SelectedFile { name: f.name(), size: f.size().max(0.0) as u64 });
            body.set_value(file);
            controller.with_value(|c| c.select_file(selected));
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_upload = move |_| {
        let current = session.get_untracked();
        #[cfg(feature = "csr")]
        body.with_value(|file| {
            controller.with_value(|c| c.start(file.as_ref(), current.session.as_ref()));
        });
        #[cfg(not(feature = "csr"))]
        let _ = current;
    };

    let selected_name = move || upload.get().selected.map(|f| f.name).unwrap_or_default();
    let progress_width = move || format!("{}%", upload.get().state.progress_percent);
    let error_message = move || upload.get().state.error.unwrap_or_default();

    view! {
        <section class="card upload-panel">
            <h2 class="card__title">"Upload a File"</h2>
            <div class="upload-panel__row">
                <input class="upload-panel__input" type="file" on:change=on_file_change/>
                <button
                    class="btn btn--primary"
                    on:click=on_upload
                    disabled=move || !upload.get().can_upload()
                >
                    <span class="btn__icon" aria-hidden="true">"\u{2601}"</span>
                    "Upload"
                </button>
            </div>
            <Show when=move || upload.get().selected.is_some()>
                <p class="upload-panel__selected">"Selected file: " {selected_name}</p>
            </Show>
            <Show when=move || upload.get().state.shows_progress_bar()>
                <div class="progress">
                    <div class="progress__bar" style:width=progress_width></div>
                </div>
            </Show>
            <Show when=move || upload.get().state.completed>
                <p class="upload-panel__status upload-panel__status--success">{UPLOAD_COMPLETED_MESSAGE}</p>
            </Show>
            <Show when=move || upload.get().state.error.is_some()>
                <p class="upload-panel__status upload-panel__status--error">{error_message}</p>
            </Show>
        </section>
    }
}
