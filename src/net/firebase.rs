//! Browser bindings to the Firebase SDK through `js/platform.js`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SDK and the prebuilt sign-in widget are loaded by `index.html`; the
//! glue module holds the initialized app, auth, storage and widget instances.
//! Everything crossing the boundary is a string, a number, a `File`, or an
//! opaque task handle.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::error::PlatformError;
use super::platform::{
    IdentityProvider, ObjectStorage, SessionListener, SignInWidget, Subscription, TransferHandle,
    TransferObserver,
};
use super::types::{TransferEvent, WidgetConfig, parse_session};
use crate::config::PlatformConfig;

#[wasm_bindgen(module = "/js/platform.js")]
extern "C" {
    #[wasm_bindgen(js_name = initPlatform, catch)]
    fn init_platform(config_json: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = subscribeSession)]
    fn subscribe_session(callback: &Closure<dyn FnMut(JsValue)>) -> js_sys::Function;

    #[wasm_bindgen(js_name = signOut)]
    fn sign_out_js() -> js_sys::Promise;

    #[wasm_bindgen(js_name = mountSignInWidget, catch)]
    fn mount_sign_in_widget(
        selector: &str,
        config_json: &str,
        on_success: &Closure<dyn FnMut()>,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = unmountSignInWidget)]
    fn unmount_sign_in_widget();

    #[wasm_bindgen(js_name = startTransfer, catch)]
    fn start_transfer_js(
        path: &str,
        file: &web_sys::File,
        on_progress: &Closure<dyn FnMut(f64, f64)>,
        on_error: &Closure<dyn FnMut(JsValue)>,
        on_complete: &Closure<dyn FnMut()>,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = cancelTransfer)]
    fn cancel_transfer(task: &JsValue);

    #[wasm_bindgen(js_name = resolveDownloadUrl)]
    fn resolve_download_url_js(task: &JsValue) -> js_sys::Promise;
}

/// Initialize the SDK app, auth, storage and widget instances.
///
/// # Errors
///
/// Returns [`PlatformError::Bridge`] if the SDK rejects the configuration.
pub fn init(config: &PlatformConfig) -> Result<(), PlatformError> {
    let json = config.to_json().map_err(|e| PlatformError::Bridge(e.to_string()))?;
    init_platform(&json).map_err(|e| PlatformError::Bridge(PlatformError::describe(&e)))
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FirebaseIdentity;

impl IdentityProvider for FirebaseIdentity {
    fn subscribe(&self, mut listener: SessionListener) -> Subscription {
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
            listener(parse_session(payload.as_string().as_deref()));
        });
        let unsubscribe = subscribe_session(&callback);
        Subscription::new(move || {
            if let Err(e) = unsubscribe.call0(&JsValue::NULL) {
                log::warn!("session unsubscribe failed: {}", PlatformError::describe(&e));
            }
            drop(callback);
        })
    }

    fn sign_out(&self) {
        let promise = sign_out_js();
        leptos::task::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("sign-out failed: {}", PlatformError::describe(&e));
            }
        });
    }
}

/// The prebuilt sign-in widget. Keeps the success callback alive while mounted.
#[derive(Default)]
pub struct FirebaseSignInWidget {
    on_success: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl SignInWidget for FirebaseSignInWidget {
    fn mount(
        &self,
        container_selector: &str,
        config: &WidgetConfig,
        on_success: Rc<dyn Fn()>,
    ) -> Result<(), PlatformError> {
        let json =
            serde_json::to_string(config).map_err(|e| PlatformError::WidgetMount(e.to_string()))?;
        let callback = Closure::<dyn FnMut()>::new(move || on_success());
        mount_sign_in_widget(container_selector, &json, &callback)
            .map_err(|e| PlatformError::WidgetMount(PlatformError::describe(&e)))?;
        *self.on_success.borrow_mut() = Some(callback);
        Ok(())
    }

    fn unmount(&self) {
        unmount_sign_in_widget();
        self.on_success.borrow_mut().take();
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FirebaseStorage;

/// A running upload task.
pub struct FirebaseTransfer {
    task: JsValue,
}

impl TransferHandle for FirebaseTransfer {
    fn cancel(&self) {
        cancel_transfer(&self.task);
    }

    fn resolve_download_url(&self) -> LocalBoxFuture<'static, Result<String, PlatformError>> {
        let promise = resolve_download_url_js(&self.task);
        Box::pin(async move {
            let value = JsFuture::from(promise)
                .await
                .map_err(|e| PlatformError::UrlResolution(PlatformError::describe(&e)))?;
            value
                .as_string()
                .ok_or_else(|| PlatformError::UrlResolution("url is not a string".to_owned()))
        })
    }
}

impl ObjectStorage for FirebaseStorage {
    type Body = web_sys::File;
    type Transfer = FirebaseTransfer;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn start_transfer(
        &self,
        path: &str,
        body: &Self::Body,
        observer: TransferObserver,
    ) -> Result<Self::Transfer, PlatformError> {
        let progress_observer = Rc::clone(&observer);
        let on_progress = Closure::<dyn FnMut(f64, f64)>::new(move |done: f64, total: f64| {
            progress_observer(TransferEvent::Progress {
                bytes_transferred: done.max(0.0) as u64,
                total_bytes: total.max(0.0) as u64,
            });
        });
        let error_observer = Rc::clone(&observer);
        let on_error = Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
            error_observer(TransferEvent::Failed(PlatformError::describe(&err)));
        });
        let on_complete = Closure::<dyn FnMut()>::new(move || observer(TransferEvent::Completed));

        let task = start_transfer_js(path, body, &on_progress, &on_error, &on_complete)
            .map_err(|e| PlatformError::Transfer(PlatformError::describe(&e)))?;

        // The task keeps calling these until it settles, even after cancel.
        on_progress.forget();
        on_error.forget();
        on_complete.forget();

        Ok(FirebaseTransfer { task })
    }
}
