//! Failure taxonomy for platform collaborators.
//!
//! ERROR HANDLING
//! ==============
//! Each asynchronous source handles only its own failure: widget mounts and
//! URL resolution are logged and dropped, transfer failures become the single
//! user-facing upload message. Nothing here is retried or fatal.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    #[error("sign-in widget failed to mount: {0}")]
    WidgetMount(String),
    #[error("transfer failed: {0}")]
    Transfer(String),
    #[error("download url resolution failed: {0}")]
    UrlResolution(String),
    #[error("platform bridge error: {0}")]
    Bridge(String),
}

#[cfg(feature = "csr")]
impl PlatformError {
    /// Render a thrown JS value into a message string.
    pub(crate) fn describe(value: &wasm_bindgen::JsValue) -> String {
        value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(value, &wasm_bindgen::JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"))
    }
}
