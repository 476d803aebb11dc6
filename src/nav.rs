use gloo::console;
use web_sys::Document;

use neonpage_core::nav_link_is_active;

use crate::browser::{js_err, query_all};

pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const ACTIVE_CLASS: &str = "active";

/// Marks every nav link whose href occurs in `path`. Returns how many were
/// marked.
pub fn highlight_active_nav_links(document: &Document, path: &str) -> usize {
    let mut marked = 0;
    for link in query_all(document, NAV_LINK_SELECTOR) {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        if !nav_link_is_active(path, &href) {
            continue;
        }
        match link.class_list().add_1(ACTIVE_CLASS) {
            Ok(()) => marked += 1,
            Err(err) => console::warn!("nav highlight failed", href, js_err(err)),
        }
    }
    marked
}
