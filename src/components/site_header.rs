//! Top bar with logo, title and the sign-in trigger.

use leptos::prelude::*;

use crate::components::logo::Logo;
use crate::components::sign_in_button::SignInButton;
use crate::components::sign_in_modal::SignInModal;

pub const APP_TITLE: &str = "File Drop";

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <div class="site-header__brand">
                    <Logo/>
                    <h1 class="site-header__title">{APP_TITLE}</h1>
                </div>
                <SignInButton/>
                <SignInModal/>
            </div>
        </header>
    }
}
