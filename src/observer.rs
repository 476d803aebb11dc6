use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::browser::has_property;

/// An `IntersectionObserver` together with its callback. Dropping the handle
/// disconnects the observer.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ObserverHandle {
    pub(crate) fn new<F>(options: Option<&IntersectionObserverInit>, mut on_entry: F) -> Result<Self, JsValue>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    on_entry(&entry, &observer);
                }
            },
        ));
        let observer = match options {
            Some(options) => {
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)?
            }
            None => IntersectionObserver::new(callback.as_ref().unchecked_ref())?,
        };
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub(crate) fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn intersection_observer_supported(window: &Window) -> bool {
    has_property(window, "IntersectionObserver")
}
