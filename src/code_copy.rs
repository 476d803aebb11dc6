use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlElement};

use neonpage_core::{copy_with_feedback, Capabilities, CopyConfig, LabelSink};

use crate::browser::{js_err, query_all, set_style};

pub const CODE_BLOCK_SELECTOR: &str = "pre code";
pub const COPY_BUTTON_CLASS: &str = "copy-code-btn";

const COPY_BUTTON_STYLE: &str = "position: absolute; top: 8px; right: 8px; \
    padding: 4px 8px; background: var(--neon-cyan); color: var(--bg-primary); \
    border: none; border-radius: 4px; cursor: pointer; font-size: 0.8rem; \
    opacity: 0; transition: opacity 0.3s ease;";

/// A copy button injected into a `pre`. Dropping it removes the button and
/// its listeners.
pub struct CopyButton {
    button: HtmlElement,
    _listeners: Vec<EventListener>,
}

impl CopyButton {
    pub fn element(&self) -> &HtmlElement {
        &self.button
    }
}

impl Drop for CopyButton {
    fn drop(&mut self) {
        self.button.remove();
    }
}

struct ButtonLabel(HtmlElement);

impl LabelSink for ButtonLabel {
    fn set_label(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

pub fn init_code_copy(
    document: &Document,
    config: &CopyConfig,
    caps: &Capabilities,
) -> Vec<CopyButton> {
    query_all(document, CODE_BLOCK_SELECTOR)
        .iter()
        .filter_map(|block| match attach_copy_button(document, block, config, caps) {
            Ok(button) => button,
            Err(err) => {
                console::warn!("copy button injection failed", js_err(err));
                None
            }
        })
        .collect()
}

fn attach_copy_button(
    document: &Document,
    block: &Element,
    config: &CopyConfig,
    caps: &Capabilities,
) -> Result<Option<CopyButton>, JsValue> {
    let Some(pre) = block
        .parent_element()
        .and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(None);
    };
    let button = document
        .create_element("button")?
        .dyn_into::<HtmlElement>()
        .map_err(JsValue::from)?;
    button.set_class_name(COPY_BUTTON_CLASS);
    button.set_text_content(Some(&config.label));
    button.style().set_css_text(COPY_BUTTON_STYLE);
    pre.style().set_property("position", "relative")?;
    pre.append_child(&button)?;

    let on_enter = {
        let button = button.clone();
        EventListener::new(&pre, "mouseenter", move |_event: &Event| {
            set_style(&button, "opacity", "1");
        })
    };
    let on_leave = {
        let button = button.clone();
        EventListener::new(&pre, "mouseleave", move |_event: &Event| {
            set_style(&button, "opacity", "0");
        })
    };
    let on_click = {
        let target = button.clone();
        let block = block.clone();
        let caps = caps.clone();
        let config = config.clone();
        EventListener::new(&button, "click", move |_event: &Event| {
            let text = block.text_content().unwrap_or_default();
            let label = ButtonLabel(target.clone());
            let caps = caps.clone();
            let config = config.clone();
            spawn_local(async move {
                let copied = copy_with_feedback(
                    caps.clipboard.as_ref(),
                    caps.timer.as_ref(),
                    &label,
                    &text,
                    &config,
                )
                .await;
                if let Err(err) = copied {
                    console::error!("failed to copy", err.to_string());
                }
            });
        })
    };

    Ok(Some(CopyButton {
        button,
        _listeners: vec![on_enter, on_leave, on_click],
    }))
}
