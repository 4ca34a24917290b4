//! Application logo mark.

use leptos::prelude::*;

#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <svg class="logo" width="40" height="40" viewBox="0 0 40 40" fill="none" aria-hidden="true">
            <rect width="40" height="40" rx="8" fill="#4F46E5"></rect>
            <path d="M20 10L28 25H12L20 10Z" fill="white"></path>
        </svg>
    }
}
