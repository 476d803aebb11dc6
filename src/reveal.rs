use gloo::console;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, IntersectionObserverInit, Window};

use neonpage_core::RevealConfig;

use crate::browser::{js_err, query_all};
use crate::observer::{intersection_observer_supported, ObserverHandle};

/// Adds the reveal class to cards as they scroll into view. Without
/// `IntersectionObserver` every card is revealed up front.
pub fn init_scroll_reveal(
    window: &Window,
    document: &Document,
    config: &RevealConfig,
) -> Option<ObserverHandle> {
    if config.selectors.is_empty() {
        return None;
    }
    let elements = query_all(document, &config.selector());
    if !intersection_observer_supported(window) {
        reveal_all(&elements, &config.class_name);
        return None;
    }

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);
    let class_name = config.class_name.clone();
    let handle = ObserverHandle::new(Some(&options), move |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        reveal(&target, &class_name);
        observer.unobserve(&target);
    });
    match handle {
        Ok(handle) => {
            for element in &elements {
                handle.observe(element);
            }
            Some(handle)
        }
        Err(err) => {
            console::warn!("scroll reveal observer failed", js_err(err));
            reveal_all(&elements, &config.class_name);
            None
        }
    }
}

/// Marks `element` visible. Returns false if it already was.
pub fn reveal(element: &Element, class_name: &str) -> bool {
    let classes = element.class_list();
    if classes.contains(class_name) {
        return false;
    }
    if let Err(err) = classes.add_1(class_name) {
        console::warn!("reveal failed", js_err(err));
        return false;
    }
    true
}

fn reveal_all(elements: &[Element], class_name: &str) {
    for element in elements {
        reveal(element, class_name);
    }
}
