use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, KeyboardEvent};

use neonpage_core::{shortcut_target, Lang, Location};

/// Alt+H / Alt+B / Alt+T jump to home, blog and toolbox in the current
/// language.
pub fn init_keyboard_navigation(
    target: &EventTarget,
    location: Rc<dyn Location>,
    fallback: Lang,
) -> EventListener {
    EventListener::new(target, "keydown", move |event: &Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let path = location.pathname();
        if let Some(href) = shortcut_target(&path, event.alt_key(), &event.key(), fallback) {
            location.navigate(&href);
        }
    })
}
