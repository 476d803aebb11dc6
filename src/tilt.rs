use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent};

use neonpage_core::{reset_transform, Bounds, Tilt, TiltConfig};

use crate::browser::{query_all, set_style};

pub const TILT_SELECTOR: &str = "[data-tilt]";

pub fn init_card_tilt(document: &Document, config: &TiltConfig) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for card in query_all(document, TILT_SELECTOR) {
        let Ok(card) = card.dyn_into::<HtmlElement>() else {
            continue;
        };
        let on_move = {
            let target = card.clone();
            let config = config.clone();
            EventListener::new(&card, "mousemove", move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let tilt = Tilt::from_pointer(
                    bounds_of(&target),
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                    config.divisor,
                );
                set_style(&target, "transform", &tilt.transform(&config));
            })
        };
        let on_leave = {
            let target = card.clone();
            let reset = reset_transform(config);
            EventListener::new(&card, "mouseleave", move |_event: &Event| {
                set_style(&target, "transform", &reset);
            })
        };
        listeners.push(on_move);
        listeners.push(on_leave);
    }
    listeners
}

fn bounds_of(element: &HtmlElement) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}
