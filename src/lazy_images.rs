use gloo::console;
use web_sys::{Document, Element, Window};

use crate::browser::{js_err, query_all};
use crate::observer::{intersection_observer_supported, ObserverHandle};

pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const DEFERRED_SRC_ATTR: &str = "data-src";

pub fn init_lazy_images(window: &Window, document: &Document) -> Option<ObserverHandle> {
    let images = query_all(document, LAZY_IMAGE_SELECTOR);
    if images.is_empty() {
        return None;
    }
    if !intersection_observer_supported(window) {
        load_all(&images);
        return None;
    }
    let handle = ObserverHandle::new(None, |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let image = entry.target();
        load_deferred_image(&image);
        observer.unobserve(&image);
    });
    match handle {
        Ok(handle) => {
            for image in &images {
                handle.observe(image);
            }
            Some(handle)
        }
        Err(err) => {
            console::warn!("lazy image observer failed", js_err(err));
            load_all(&images);
            None
        }
    }
}

/// Moves `data-src` into `src`. Returns false if there was nothing deferred.
pub fn load_deferred_image(image: &Element) -> bool {
    let Some(src) = image.get_attribute(DEFERRED_SRC_ATTR) else {
        return false;
    };
    if let Err(err) = image.set_attribute("src", &src) {
        console::warn!("lazy image load failed", src, js_err(err));
        return false;
    }
    if let Err(err) = image.remove_attribute(DEFERRED_SRC_ATTR) {
        console::warn!("lazy image marker removal failed", js_err(err));
    }
    true
}

fn load_all(images: &[Element]) {
    for image in images {
        load_deferred_image(image);
    }
}
