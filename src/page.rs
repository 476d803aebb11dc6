use gloo::console;
use gloo::events::EventListener;
use web_sys::{Document, Window};

use neonpage_core::{Capabilities, SiteConfig};

use crate::code_copy::{init_code_copy, CopyButton};
use crate::keyboard::init_keyboard_navigation;
use crate::lazy_images::init_lazy_images;
use crate::motion::respect_reduced_motion;
use crate::nav::highlight_active_nav_links;
use crate::observer::ObserverHandle;
use crate::reveal::init_scroll_reveal;
use crate::service_worker::init_service_worker;
use crate::smooth_scroll::init_smooth_scroll;
use crate::tilt::init_card_tilt;

/// Everything the initializer attached to the page. Dropping it removes the
/// listeners, disconnects the observers and takes the copy buttons back out.
pub struct PageBehaviors {
    listeners: Vec<EventListener>,
    observers: Vec<ObserverHandle>,
    copy_buttons: Vec<CopyButton>,
}

impl PageBehaviors {
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn copy_buttons(&self) -> &[CopyButton] {
        &self.copy_buttons
    }

    pub fn teardown(self) {
        drop(self);
    }
}

pub fn init_page(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
    caps: &Capabilities,
) -> PageBehaviors {
    respect_reduced_motion(window, document, &config.motion);

    let mut listeners = init_card_tilt(document, &config.tilt);
    listeners.extend(init_smooth_scroll(document));

    let mut observers = Vec::new();
    observers.extend(init_scroll_reveal(window, document, &config.reveal));

    highlight_active_nav_links(document, &caps.location.pathname());
    listeners.push(init_keyboard_navigation(
        document,
        caps.location.clone(),
        config.default_lang,
    ));
    observers.extend(init_lazy_images(window, document));
    let copy_buttons = init_code_copy(document, &config.copy, caps);
    listeners.extend(init_service_worker(
        window,
        document,
        config.service_worker.as_deref(),
    ));

    console::log!("site initialized");
    PageBehaviors {
        listeners,
        observers,
        copy_buttons,
    }
}
