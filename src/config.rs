use gloo::console;
use web_sys::Document;

use neonpage_core::SiteConfig;

/// Id of the `<script type="application/json">` element carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub fn load_site_config(document: &Document) -> SiteConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return SiteConfig::default();
    };
    parse_site_config(&element.text_content().unwrap_or_default())
}

pub fn parse_site_config(raw: &str) -> SiteConfig {
    if raw.trim().is_empty() {
        return SiteConfig::default();
    }
    match serde_json::from_str(raw) {
        Ok(config) => config,
        Err(err) => {
            console::warn!("invalid site config, using defaults", err.to_string());
            SiteConfig::default()
        }
    }
}
