//! Landing page: header plus either the upload panel or the welcome card.

use leptos::prelude::*;

use crate::components::site_header::SiteHeader;
use crate::components::upload_panel::UploadPanel;
use crate::components::welcome_card::WelcomeCard;
use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="home-page">
            <SiteHeader/>
            <main class="home-page__main">
                <Show
                    when=move || session.get().is_signed_in()
                    fallback=move || {
                        view! {
                            <Show
                                when=move || !session.get().loading
                                fallback=|| view! { <p class="home-page__loading">"Loading..."</p> }
                            >
                                <WelcomeCard/>
                            </Show>
                        }
                    }
                >
                    <UploadPanel/>
                </Show>
            </main>
        </div>
    }
}
