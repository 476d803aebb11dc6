#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use gloo::timers::future::TimeoutFuture;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{
    window, Document, Element, Event, HtmlElement, KeyboardEvent, KeyboardEventInit, MouseEvent,
    MouseEventInit, Node,
};

use neonpage::code_copy::{init_code_copy, COPY_BUTTON_CLASS};
use neonpage::config::parse_site_config;
use neonpage::boot::dom_ready;
use neonpage::keyboard::init_keyboard_navigation;
use neonpage::language::{
    install_switch_language, switch_language, switch_language_code, SWITCH_LANGUAGE_GLOBAL,
};
use neonpage::lazy_images::{init_lazy_images, load_deferred_image, DEFERRED_SRC_ATTR};
use neonpage::motion::disable_transitions;
use neonpage::nav::{highlight_active_nav_links, ACTIVE_CLASS};
use neonpage::page::init_page;
use neonpage::reveal::{init_scroll_reveal, reveal};
use neonpage::service_worker::page_loaded;
use neonpage::smooth_scroll::{init_smooth_scroll, scroll_to_fragment};
use neonpage::tilt::init_card_tilt;
use neonpage_core::{
    reset_transform, Capabilities, Clipboard, ClipboardError, CopyConfig, Lang, Location,
    MotionConfig, RevealConfig, SiteConfig, Tilt, Timer, TiltConfig,
};

wasm_bindgen_test_configure!(run_in_browser);

struct FakeLocation {
    path: String,
    visited: RefCell<Vec<String>>,
}

impl FakeLocation {
    fn at(path: &str) -> Rc<Self> {
        Rc::new(Self {
            path: path.to_string(),
            visited: RefCell::new(Vec::new()),
        })
    }
}

impl Location for FakeLocation {
    fn pathname(&self) -> String {
        self.path.clone()
    }

    fn navigate(&self, href: &str) {
        self.visited.borrow_mut().push(href.to_string());
    }
}

struct FailingClipboard;

impl Clipboard for FailingClipboard {
    fn write_text(&self, _text: &str) -> LocalBoxFuture<'static, Result<(), ClipboardError>> {
        Box::pin(async { Err(ClipboardError::Rejected("denied".to_string())) })
    }
}

struct InstantTimer;

impl Timer for InstantTimer {
    fn sleep(&self, _ms: u32) -> LocalBoxFuture<'static, ()> {
        Box::pin(async {})
    }
}

fn document() -> Document {
    window()
        .expect("window missing")
        .document()
        .expect("document missing")
}

/// Appends `html` inside a fresh container on the body.
fn fixture(html: &str) -> HtmlElement {
    let document = document();
    let container = document
        .create_element("div")
        .expect("create div")
        .dyn_into::<HtmlElement>()
        .expect("div element");
    container.set_inner_html(html);
    document
        .body()
        .expect("body missing")
        .append_child(&container)
        .expect("append fixture");
    container
}

fn find(root: &HtmlElement, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("{selector} missing"))
        .dyn_into::<HtmlElement>()
        .expect("html element")
}

fn transform_of(element: &HtmlElement) -> String {
    element
        .style()
        .get_property_value("transform")
        .expect("transform readable")
}

/// Browser-normalised form of `transform`.
fn normalised_transform(transform: &str) -> String {
    let probe = document()
        .create_element("div")
        .expect("create div")
        .dyn_into::<HtmlElement>()
        .expect("div element");
    probe
        .style()
        .set_property("transform", transform)
        .expect("set transform");
    transform_of(&probe)
}

fn caps(location: Rc<FakeLocation>, clipboard: Rc<dyn Clipboard>) -> Capabilities {
    Capabilities {
        location,
        clipboard,
        timer: Rc::new(InstantTimer),
    }
}

#[wasm_bindgen_test]
fn tilt_tracks_pointer_and_resets_on_leave() {
    let root = fixture(
        r#"<div data-tilt style="position:fixed;left:0;top:0;width:200px;height:100px"></div>"#,
    );
    let card = find(&root, "[data-tilt]");
    let config = TiltConfig::default();
    let listeners = init_card_tilt(&document(), &config);

    let init = MouseEventInit::new();
    init.set_client_x(100);
    init.set_client_y(50);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).expect("mousemove");
    card.dispatch_event(&event).expect("dispatch mousemove");
    assert_eq!(
        transform_of(&card),
        normalised_transform(&Tilt::default().transform(&config))
    );

    let leave = Event::new("mouseleave").expect("mouseleave");
    card.dispatch_event(&leave).expect("dispatch mouseleave");
    assert_eq!(
        transform_of(&card),
        normalised_transform(&reset_transform(&config))
    );

    drop(listeners);
    root.remove();
}

#[wasm_bindgen_test]
fn nav_links_matching_path_are_marked() {
    let root = fixture(
        r#"<a class="nav-link" href="/">root</a>
           <a class="nav-link" href="/en/blog/">blog</a>
           <a class="nav-link" href="/en/toolbox/">toolbox</a>"#,
    );
    let marked = highlight_active_nav_links(&document(), "/en/blog/rust-notes/");
    assert_eq!(marked, 1);
    assert!(find(&root, r#"[href="/en/blog/"]"#).class_list().contains(ACTIVE_CLASS));
    assert!(!find(&root, r#"[href="/"]"#).class_list().contains(ACTIVE_CLASS));
    assert!(!find(&root, r#"[href="/en/toolbox/"]"#).class_list().contains(ACTIVE_CLASS));
    root.remove();
}

#[wasm_bindgen_test]
fn alt_shortcuts_navigate_under_language_prefix() {
    let target: Element = document().create_element("div").expect("create div");
    let location = FakeLocation::at("/en/blog/rust-notes/");
    let listener = init_keyboard_navigation(&target, location.clone(), Lang::Zh);

    for (alt, key) in [(true, "t"), (false, "h"), (true, "x"), (true, "h")] {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        init.set_alt_key(alt);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .expect("keydown");
        target.dispatch_event(&event).expect("dispatch keydown");
    }

    assert_eq!(
        location.visited.borrow().as_slice(),
        ["/en/toolbox/", "/en/"]
    );
    drop(listener);
}

#[wasm_bindgen_test]
fn switch_language_navigates_to_swapped_prefix() {
    let location = FakeLocation::at("/en/blog/");
    assert_eq!(switch_language(location.as_ref(), Lang::Zh), "/zh/blog/");
    let location = FakeLocation::at("/toolbox/");
    assert_eq!(switch_language(location.as_ref(), Lang::En), "/en/");
    assert_eq!(location.visited.borrow().as_slice(), ["/en/"]);
}

#[wasm_bindgen_test]
fn reveal_adds_class_once() {
    let root = fixture(r#"<div class="post-card"></div>"#);
    let card = find(&root, ".post-card");
    assert!(reveal(&card, "visible"));
    assert!(!reveal(&card, "visible"));
    assert!(card.class_list().contains("visible"));
    root.remove();
}

#[wasm_bindgen_test]
fn deferred_image_source_is_swapped_in() {
    let root = fixture(r#"<img data-src="/static/img/cover.png">"#);
    let image = find(&root, "img");
    assert!(load_deferred_image(&image));
    assert_eq!(image.get_attribute("src").as_deref(), Some("/static/img/cover.png"));
    assert!(!image.has_attribute(DEFERRED_SRC_ATTR));
    assert!(!load_deferred_image(&image));
    root.remove();
}

#[wasm_bindgen_test]
fn reduced_motion_overrides_transition_variable() {
    let root = fixture("");
    disable_transitions(&root, &MotionConfig::default());
    assert_eq!(
        root.style().get_property_value("--transition").expect("read"),
        "none"
    );
    root.remove();
}

#[wasm_bindgen_test]
fn missing_scroll_target_is_ignored() {
    let root = fixture(r#"<section id="tools"></section>"#);
    assert!(scroll_to_fragment(&document(), "#tools"));
    assert!(!scroll_to_fragment(&document(), "#nowhere"));
    assert!(!scroll_to_fragment(&document(), "#"));
    root.remove();
}

#[wasm_bindgen_test]
fn invalid_config_falls_back_to_defaults() {
    let config = parse_site_config("{ not json");
    assert_eq!(config, neonpage::SiteConfig::default());
    let config = parse_site_config(r#"{ "default_lang": "en" }"#);
    assert_eq!(config.default_lang, Lang::En);
}

#[wasm_bindgen_test(async)]
async fn copy_button_toggles_and_survives_clipboard_failure() {
    let root = fixture("<pre><code>cargo build --release</code></pre>");
    let pre = find(&root, "pre");
    let caps = caps(FakeLocation::at("/en/"), Rc::new(FailingClipboard));
    let buttons = init_code_copy(&document(), &CopyConfig::default(), &caps);
    assert_eq!(buttons.len(), 1);

    let button = find(&root, &format!(".{COPY_BUTTON_CLASS}"));
    assert_eq!(button.text_content().as_deref(), Some("Copy"));
    assert_eq!(pre.style().get_property_value("position").expect("read"), "relative");

    pre.dispatch_event(&Event::new("mouseenter").expect("mouseenter"))
        .expect("dispatch mouseenter");
    assert_eq!(button.style().get_property_value("opacity").expect("read"), "1");
    pre.dispatch_event(&Event::new("mouseleave").expect("mouseleave"))
        .expect("dispatch mouseleave");
    assert_eq!(button.style().get_property_value("opacity").expect("read"), "0");

    button.click();
    TimeoutFuture::new(10).await;
    assert_eq!(button.text_content().as_deref(), Some("Copy"));

    drop(buttons);
    assert!(root.query_selector(&format!(".{COPY_BUTTON_CLASS}")).expect("query").is_none());
    root.remove();
}

fn reveal_config(selector: &str) -> RevealConfig {
    RevealConfig {
        selectors: vec![selector.to_string()],
        ..RevealConfig::default()
    }
}

/// Runs `body` with `window.IntersectionObserver` removed, then puts it back.
fn without_intersection_observer<F: FnOnce()>(body: F) {
    let window = window().expect("window missing");
    let key = JsValue::from_str("IntersectionObserver");
    let saved = Reflect::get(&window, &key).expect("read IntersectionObserver");
    assert!(Reflect::delete_property(&window, &key).expect("delete IntersectionObserver"));
    body();
    Reflect::set(&window, &key, &saved).expect("restore IntersectionObserver");
}

#[wasm_bindgen_test]
fn document_state_checks_match_loaded_test_page() {
    let document = document();
    assert!(dom_ready(&document));
    assert_eq!(page_loaded(&document), document.ready_state() == "complete");
}

#[wasm_bindgen_test]
fn switch_language_global_is_installed_on_window() {
    let window = window().expect("window missing");
    install_switch_language(&window).expect("install global");
    let value = Reflect::get(&window, &JsValue::from_str(SWITCH_LANGUAGE_GLOBAL))
        .expect("read global");
    assert!(value.is_function());
}

#[wasm_bindgen_test]
fn unknown_language_codes_do_not_navigate() {
    let location = FakeLocation::at("/en/blog/");
    assert_eq!(switch_language_code(location.as_ref(), "fr"), None);
    assert_eq!(switch_language_code(location.as_ref(), " zh"), None);
    assert_eq!(
        switch_language_code(location.as_ref(), "zh").as_deref(),
        Some("/zh/blog/")
    );
    assert_eq!(location.visited.borrow().as_slice(), ["/zh/blog/"]);
}

#[wasm_bindgen_test]
fn anchor_clicks_cancel_default_navigation() {
    let root = fixture(r##"<a href="#about">about</a><section id="about"></section>"##);
    let anchor = find(&root, r##"a[href="#about"]"##);
    let listeners = init_smooth_scroll(&document());

    let init = MouseEventInit::new();
    init.set_cancelable(true);
    let click = MouseEvent::new_with_mouse_event_init_dict("click", &init).expect("click");
    anchor.dispatch_event(&click).expect("dispatch click");
    assert!(click.default_prevented());

    drop(listeners);
    root.remove();
}

#[wasm_bindgen_test(async)]
async fn observers_reveal_cards_and_load_images_in_view() {
    let root = fixture(
        r#"<div class="observed-card" style="position:fixed;left:0;top:0;width:50px;height:50px"></div>
           <img data-src="/static/img/observed.png" style="position:fixed;left:60px;top:0;width:50px;height:50px">"#,
    );
    let window = window().expect("window missing");
    let reveal_handle = init_scroll_reveal(&window, &document(), &reveal_config(".observed-card"));
    let image_handle = init_lazy_images(&window, &document());
    assert!(reveal_handle.is_some());
    assert!(image_handle.is_some());

    let card = find(&root, ".observed-card");
    let image = find(&root, "img");
    assert!(!card.class_list().contains("visible"));
    for _ in 0..20 {
        if card.class_list().contains("visible") && !image.has_attribute(DEFERRED_SRC_ATTR) {
            break;
        }
        TimeoutFuture::new(50).await;
    }
    assert!(card.class_list().contains("visible"));
    assert_eq!(image.get_attribute("src").as_deref(), Some("/static/img/observed.png"));
    assert!(!image.has_attribute(DEFERRED_SRC_ATTR));

    drop(reveal_handle);
    drop(image_handle);
    root.remove();
}

#[wasm_bindgen_test]
fn missing_intersection_observer_reveals_and_loads_eagerly() {
    let root = fixture(
        r#"<div class="fallback-card"></div><img data-src="/static/img/fallback.png">"#,
    );
    let window = window().expect("window missing");
    without_intersection_observer(|| {
        let reveal_handle =
            init_scroll_reveal(&window, &document(), &reveal_config(".fallback-card"));
        let image_handle = init_lazy_images(&window, &document());
        assert!(reveal_handle.is_none());
        assert!(image_handle.is_none());
    });

    assert!(find(&root, ".fallback-card").class_list().contains("visible"));
    let image = find(&root, "img");
    assert_eq!(image.get_attribute("src").as_deref(), Some("/static/img/fallback.png"));
    assert!(!image.has_attribute(DEFERRED_SRC_ATTR));
    root.remove();
}

#[wasm_bindgen_test]
fn page_wiring_is_undone_on_teardown() {
    let root = fixture(
        r#"<a class="nav-link" href="/en/blog/">blog</a>
           <div data-tilt style="position:fixed;left:0;top:0;width:200px;height:100px"></div>
           <div class="post-card"></div>
           <img data-src="/static/img/page.png" style="width:10px;height:10px">
           <pre><code>let x = 1;</code></pre>"#,
    );
    let window = window().expect("window missing");
    let location = FakeLocation::at("/en/blog/rust-notes/");
    let page = init_page(
        &window,
        &document(),
        &SiteConfig::default(),
        &caps(location, Rc::new(FailingClipboard)),
    );

    assert!(find(&root, ".nav-link").class_list().contains(ACTIVE_CLASS));
    // two tilt listeners plus the keyboard listener
    assert!(page.listener_count() >= 3);
    assert_eq!(page.observer_count(), 2);
    assert_eq!(page.copy_buttons().len(), 1);
    let pre = find(&root, "pre");
    let button = page.copy_buttons()[0].element().clone();
    let button_node: &Node = &button;
    assert!(pre.contains(Some(button_node)));

    let card = find(&root, "[data-tilt]");
    page.teardown();

    assert!(!pre.contains(Some(button_node)));
    assert!(root.query_selector(&format!(".{COPY_BUTTON_CLASS}")).expect("query").is_none());

    card.style().set_property("transform", "none").expect("set transform");
    let init = MouseEventInit::new();
    init.set_client_x(10);
    init.set_client_y(10);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).expect("mousemove");
    card.dispatch_event(&event).expect("dispatch mousemove");
    assert_eq!(transform_of(&card), "none");
    root.remove();
}
