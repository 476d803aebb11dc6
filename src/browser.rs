use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use gloo::console;
use gloo::timers::future::TimeoutFuture;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement};

use neonpage_core::{Capabilities, Clipboard, ClipboardError, Location, Timer};

/// `window.location`.
pub struct BrowserLocation;

impl Location for BrowserLocation {
    fn pathname(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_default()
    }

    fn navigate(&self, href: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(href) {
            console::warn!("navigation failed", href, js_err(err));
        }
    }
}

/// `navigator.clipboard.writeText`, looked up at call time since the
/// clipboard only exists in secure contexts.
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), ClipboardError>> {
        let promise = clipboard_write(text);
        Box::pin(async move {
            let promise = promise?;
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|err| ClipboardError::Rejected(js_err(err)))
        })
    }
}

fn clipboard_write(text: &str) -> Result<Promise, ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let clipboard = property(&window.navigator(), "clipboard").ok_or(ClipboardError::Unavailable)?;
    call_promise(&clipboard, "writeText", &JsValue::from_str(text))
        .map_err(|err| ClipboardError::Rejected(js_err(err)))
}

pub struct GlooTimer;

impl Timer for GlooTimer {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        Box::pin(TimeoutFuture::new(ms))
    }
}

pub fn browser_capabilities() -> Capabilities {
    Capabilities {
        location: Rc::new(BrowserLocation),
        clipboard: Rc::new(BrowserClipboard),
        timer: Rc::new(GlooTimer),
    }
}

/// Reads `owner[name]`, treating `null`/`undefined` as absent.
pub(crate) fn property(owner: &JsValue, name: &str) -> Option<JsValue> {
    let value = Reflect::get(owner, &JsValue::from_str(name)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    Some(value)
}

pub(crate) fn has_property(owner: &JsValue, name: &str) -> bool {
    Reflect::has(owner, &JsValue::from_str(name)).unwrap_or(false)
}

/// Calls `owner[method](arg)` and expects a promise back.
pub(crate) fn call_promise(owner: &JsValue, method: &str, arg: &JsValue) -> Result<Promise, JsValue> {
    let func = property(owner, method)
        .ok_or_else(|| JsValue::from_str(&format!("{method} unavailable")))?
        .dyn_into::<Function>()?;
    let value = func.call1(owner, arg)?;
    value.dyn_into::<Promise>()
}

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            console::warn!("query failed", selector, js_err(err));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn set_style(element: &HtmlElement, name: &str, value: &str) {
    if let Err(err) = element.style().set_property(name, value) {
        console::warn!("style update failed", name, js_err(err));
    }
}
