use gloo::console;
use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::Window;

use neonpage_core::{switch_language_path, Lang, Location};

use crate::browser::BrowserLocation;

/// Name of the global the page templates call from `onclick`.
pub const SWITCH_LANGUAGE_GLOBAL: &str = "switchLanguage";

/// Navigates to the current page in `lang`. Returns the new path.
pub fn switch_language(location: &dyn Location, lang: Lang) -> String {
    let href = switch_language_path(&location.pathname(), lang);
    location.navigate(&href);
    href
}

/// Switches to `code`, ignoring codes outside the supported set.
pub fn switch_language_code(location: &dyn Location, code: &str) -> Option<String> {
    match Lang::parse(code) {
        Ok(lang) => Some(switch_language(location, lang)),
        Err(err) => {
            console::warn!("language switch ignored", err.to_string());
            None
        }
    }
}

/// Puts `switchLanguage(code)` on `window` for the templates'
/// `onclick="switchLanguage('en')"` handlers. The closure lives for the page.
pub fn install_switch_language(window: &Window) -> Result<(), JsValue> {
    let handler = Closure::<dyn Fn(JsValue)>::wrap(Box::new(|code: JsValue| {
        let Some(code) = code.as_string() else {
            console::warn!("language switch ignored", "code is not a string");
            return;
        };
        switch_language_code(&BrowserLocation, &code);
    }));
    Reflect::set(
        window,
        &JsValue::from_str(SWITCH_LANGUAGE_GLOBAL),
        handler.as_ref(),
    )?;
    handler.forget();
    Ok(())
}
