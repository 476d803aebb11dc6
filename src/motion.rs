use gloo::console;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use neonpage_core::MotionConfig;

use crate::browser::set_style;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// One-shot check at startup; later preference changes are not tracked.
pub fn respect_reduced_motion(window: &Window, document: &Document, config: &MotionConfig) -> bool {
    if !prefers_reduced_motion(window) {
        return false;
    }
    let Some(root) = document
        .document_element()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };
    disable_transitions(&root, config);
    console::log!("reduced motion mode enabled");
    true
}

pub fn prefers_reduced_motion(window: &Window) -> bool {
    matches!(window.match_media(REDUCED_MOTION_QUERY), Ok(Some(list)) if list.matches())
}

pub fn disable_transitions(root: &HtmlElement, config: &MotionConfig) {
    set_style(root, &config.variable, &config.reduced_value);
}
