//! # filedrop
//!
//! Leptos + WASM single-page client: sign in through a hosted identity
//! provider's prebuilt widget and upload a file to cloud object storage while
//! watching its progress.
//!
//! The crate holds pages, components, plain state models, the coordination
//! helpers that connect them to the platform, and the browser bindings for
//! the platform SDK (`csr` feature).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point: install logging, initialize the platform SDK, mount
/// the app. Missing configuration aborts startup.
///
/// # Errors
///
/// Returns the configuration or SDK initialization failure as a JS error.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    let config = config::PlatformConfig::from_build_env().map_err(|e| {
        log::error!("{e}");
        wasm_bindgen::JsValue::from_str(&e.to_string())
    })?;
    net::firebase::init(&config).map_err(|e| {
        log::error!("{e}");
        wasm_bindgen::JsValue::from_str(&e.to_string())
    })?;

    log::info!("filedrop starting");
    leptos::mount::mount_to_body(app::App);
    Ok(())
}
