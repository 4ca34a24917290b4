//! Signed-out placeholder shown instead of the upload panel.

use leptos::prelude::*;

#[component]
pub fn WelcomeCard() -> impl IntoView {
    view! {
        <section class="card card--centered">
            <h2 class="card__title">"Welcome"</h2>
            <p class="card__body">"Please sign in to upload files."</p>
        </section>
    }
}
