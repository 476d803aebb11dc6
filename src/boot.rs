use std::cell::{Cell, RefCell};

use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Event, Window};

use crate::browser::{browser_capabilities, js_err};
use crate::config::load_site_config;
use crate::language::install_switch_language;
use crate::page::{init_page, PageBehaviors};

thread_local! {
    static STARTED: Cell<bool> = Cell::new(false);
    static PAGE: RefCell<Option<PageBehaviors>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if let Err(err) = install_switch_language(&window) {
        console::warn!("switchLanguage global unavailable", js_err(err));
    }
    if !dom_ready(&document) {
        let target = document.clone();
        EventListener::once(&target, "DOMContentLoaded", move |_event: &Event| {
            boot(&window, &document);
        })
        .forget();
    } else {
        boot(&window, &document);
    }
}

/// Drops the page behaviors installed by [`start`] and allows another boot.
#[wasm_bindgen]
pub fn shutdown() {
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    drop(page);
    STARTED.with(|flag| flag.set(false));
}

/// False while the parser is still building the document.
pub fn dom_ready(document: &Document) -> bool {
    document.ready_state() != "loading"
}

fn boot(window: &Window, document: &Document) {
    let already_started = STARTED.with(|flag| flag.replace(true));
    if already_started {
        return;
    }
    let config = load_site_config(document);
    let page = init_page(window, document, &config, &browser_capabilities());
    PAGE.with(|slot| {
        *slot.borrow_mut() = Some(page);
    });
}
