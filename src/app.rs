//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::APP_TITLE;
use crate::pages::home::HomePage;
use crate::state::{modal::ModalState, session::SessionState, upload::UploadTracker};

/// Root application component.
///
/// Provides the shared state signals and, in the browser, starts the single
/// session watcher that feeds `SessionState` for the app's lifetime.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::pending());
    let modal = RwSignal::new(ModalState::default());
    let upload = RwSignal::new(UploadTracker::default());

    provide_context(session);
    provide_context(modal);
    provide_context(upload);

    #[cfg(feature = "csr")]
    {
        use crate::net::firebase::FirebaseIdentity;
        use crate::util::session_watcher::SessionWatcher;

        let watcher = SessionWatcher::start(&FirebaseIdentity, move |s| session.update(|st| st.apply(s)));
        let watcher = StoredValue::new_local(Some(watcher));
        // Teardown releases the subscription.
        on_cleanup(move || {
            drop(watcher.try_update_value(Option::take));
        });
    }

    view! {
        <Title text=APP_TITLE/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
