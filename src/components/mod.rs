//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the upload surface while reading/writing
//! shared state from Leptos context providers.

pub mod logo;
pub mod sign_in_button;
pub mod sign_in_modal;
pub mod site_header;
pub mod upload_panel;
pub mod welcome_card;
