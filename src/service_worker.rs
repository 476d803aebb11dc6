use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Event, Window};

use crate::browser::{call_promise, has_property, js_err, property};

/// Hooks service worker registration onto `load` when the browser supports
/// it. Nothing is registered unless `script` names a worker.
pub fn init_service_worker(
    window: &Window,
    document: &Document,
    script: Option<&str>,
) -> Option<EventListener> {
    if !has_property(&window.navigator(), "serviceWorker") {
        return None;
    }
    let script = script.map(str::to_string);
    if page_loaded(document) {
        register_on_load(script);
        return None;
    }
    Some(EventListener::once(window, "load", move |_event: &Event| {
        register_on_load(script);
    }))
}

/// Whether `load` has already fired for `document`.
pub fn page_loaded(document: &Document) -> bool {
    document.ready_state() == "complete"
}

fn register_on_load(script: Option<String>) {
    let Some(script) = script else {
        return;
    };
    spawn_local(async move {
        let registered = register(&script).await;
        match registered {
            Ok(()) => console::log!("service worker registered", script),
            Err(err) => console::warn!("service worker registration failed", script, err),
        }
    });
}

async fn register(script: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "missing window".to_string())?;
    let container = property(&window.navigator(), "serviceWorker")
        .ok_or_else(|| "service worker unavailable".to_string())?;
    let promise = call_promise(&container, "register", &JsValue::from_str(script)).map_err(js_err)?;
    JsFuture::from(promise).await.map_err(js_err)?;
    Ok(())
}
