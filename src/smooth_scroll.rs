use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Document, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::browser::query_all;

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

pub fn init_smooth_scroll(document: &Document) -> Vec<EventListener> {
    query_all(document, ANCHOR_SELECTOR)
        .into_iter()
        .map(|anchor| {
            let document = document.clone();
            let link = anchor.clone();
            EventListener::new_with_options(
                &anchor,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event: &Event| {
                    event.prevent_default();
                    if let Some(href) = link.get_attribute("href") {
                        scroll_to_fragment(&document, &href);
                    }
                },
            )
        })
        .collect()
}

/// Smoothly scrolls to the element `fragment` selects. Returns false when
/// nothing matches, including fragments that are not valid selectors.
pub fn scroll_to_fragment(document: &Document, fragment: &str) -> bool {
    let Ok(Some(target)) = document.query_selector(fragment) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
