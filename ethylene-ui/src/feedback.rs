//! Small page niceties wired up once the document is parsed:
//! buttons sink slightly while pressed, and the header logo and title
//! reload the page when clicked.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, HtmlElement, MouseEvent};

pub const BUTTON_SELECTOR: &str = ".btn";
pub const LOGO_SELECTOR: &str = ".logo";
pub const TITLE_BLOCK_SELECTOR: &str = ".title-block";

/// Inline transform applied while a button is held down.
pub const PRESSED_TRANSFORM: &str = "translateY(1px) scale(0.995)";

const PRESS_EVENT: &str = "mousedown";
const RELEASE_EVENTS: [&str; 2] = ["mouseup", "mouseleave"];

/// What a single attach pass wired up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttachReport {
    /// Buttons that received press feedback
    pub buttons: usize,
    /// Header elements that reload the page on click
    pub reload_targets: usize,
}

/// Attaches press feedback and click-to-reload handlers, at most once.
pub struct FeedbackAttacher {
    reload: Rc<dyn Fn()>,
    attached: Cell<bool>,
}

impl Default for FeedbackAttacher {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackAttacher {
    /// Attacher whose reload targets call `location.reload()`.
    pub fn new() -> Self {
        Self::with_reload(reload_page)
    }

    /// Attacher with a custom reload action.
    pub fn with_reload(reload: impl Fn() + 'static) -> Self {
        Self {
            reload: Rc::new(reload),
            attached: Cell::new(false),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    /// Wire up every matching element below `root`.
    ///
    /// Only the first call attaches anything; later calls return an empty
    /// report so listeners are never doubled up.
    pub fn attach(&self, root: &Element) -> Result<AttachReport, JsValue> {
        if self.attached.replace(true) {
            return Ok(AttachReport::default());
        }

        let buttons = root.query_selector_all(BUTTON_SELECTOR)?;
        let mut report = AttachReport::default();
        for i in 0..buttons.length() {
            let Some(button) = buttons
                .item(i)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            attach_press_feedback(&button)?;
            report.buttons += 1;
        }

        for selector in [LOGO_SELECTOR, TITLE_BLOCK_SELECTOR] {
            if let Some(target) = root.query_selector(selector)? {
                attach_reload(&target, Rc::clone(&self.reload))?;
                report.reload_targets += 1;
            }
        }

        Ok(report)
    }
}

fn set_transform(element: &HtmlElement, value: &str) {
    if let Err(e) = element.style().set_property("transform", value) {
        log::warn!("Failed to set button transform: {:?}", e);
    }
}

fn attach_press_feedback(button: &HtmlElement) -> Result<(), JsValue> {
    let pressed = button.clone();
    let on_press = Closure::wrap(Box::new(move |_: MouseEvent| {
        set_transform(&pressed, PRESSED_TRANSFORM);
    }) as Box<dyn FnMut(_)>);
    button.add_event_listener_with_callback(PRESS_EVENT, on_press.as_ref().unchecked_ref())?;
    on_press.forget();

    for event in RELEASE_EVENTS {
        let released = button.clone();
        let on_release = Closure::wrap(Box::new(move |_: MouseEvent| {
            set_transform(&released, "");
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback(event, on_release.as_ref().unchecked_ref())?;
        on_release.forget();
    }

    Ok(())
}

fn attach_reload(target: &Element, reload: Rc<dyn Fn()>) -> Result<(), JsValue> {
    let on_click = Closure::wrap(Box::new(move |_: MouseEvent| {
        reload();
    }) as Box<dyn FnMut(_)>);
    target.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

fn reload_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().reload() {
        log::warn!("Page reload failed: {:?}", e);
    }
}

thread_local! {
    static PAGE_ATTACHER: RefCell<Option<Rc<FeedbackAttacher>>> = const { RefCell::new(None) };
}

/// Install the page niceties on document ready.
///
/// Runs immediately if the document has already been parsed, otherwise on
/// `DOMContentLoaded`. Safe to call more than once.
pub fn install() {
    install_with(FeedbackAttacher::new());
}

/// [`install`] with a caller-built attacher.
///
/// The first attacher installed on a page is the one that stays; later
/// ones are dropped.
pub fn install_with(attacher: FeedbackAttacher) {
    let page = PAGE_ATTACHER.with(|slot| {
        let mut slot = slot.borrow_mut();
        Rc::clone(slot.get_or_insert_with(|| Rc::new(attacher)))
    });

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() != "loading" {
        attach_to_page(&page);
        return;
    }

    let handler = Closure::once_into_js(move || attach_to_page(&page));
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    if let Err(e) = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        handler.unchecked_ref(),
        &options,
    ) {
        log::warn!("Failed to wait for DOMContentLoaded: {:?}", e);
    }
}

fn attach_to_page(attacher: &FeedbackAttacher) {
    if attacher.is_attached() {
        return;
    }
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    match attacher.attach(&root) {
        Ok(report) => log::debug!(
            "UI feedback attached: {} buttons, {} reload targets",
            report.buttons,
            report.reload_targets
        ),
        Err(e) => log::warn!("Failed to attach UI feedback: {:?}", e),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Fresh container holding `html`, attached to the document body.
    fn fixture(html: &str) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let container = document.create_element("div").unwrap();
        container.set_inner_html(html);
        document.body().unwrap().append_child(&container).unwrap();
        container
    }

    fn counting_attacher() -> (FeedbackAttacher, Rc<Cell<u32>>) {
        let reloads = Rc::new(Cell::new(0));
        let counter = Rc::clone(&reloads);
        let attacher = FeedbackAttacher::with_reload(move || counter.set(counter.get() + 1));
        (attacher, reloads)
    }

    fn dispatch(target: &Element, event_type: &str) {
        let event = MouseEvent::new(event_type).unwrap();
        target.dispatch_event(&event).unwrap();
    }

    fn transform_of(element: &Element) -> String {
        element
            .dyn_ref::<HtmlElement>()
            .unwrap()
            .style()
            .get_property_value("transform")
            .unwrap()
    }

    fn click(element: &Element) {
        element.dyn_ref::<HtmlElement>().unwrap().click();
    }

    #[wasm_bindgen_test]
    fn press_and_release_toggle_transform() {
        let root = fixture(r#"<button class="btn">Run</button><a class="btn">Reset</a>"#);
        let (attacher, _) = counting_attacher();
        let report = attacher.attach(&root).unwrap();
        assert_eq!(report.buttons, 2);

        let buttons = root.query_selector_all(".btn").unwrap();
        for i in 0..buttons.length() {
            let button: Element = buttons.item(i).unwrap().dyn_into().unwrap();
            assert_eq!(transform_of(&button), "");

            dispatch(&button, "mousedown");
            assert_eq!(transform_of(&button), PRESSED_TRANSFORM);
            dispatch(&button, "mouseup");
            assert_eq!(transform_of(&button), "");

            dispatch(&button, "mousedown");
            assert_eq!(transform_of(&button), PRESSED_TRANSFORM);
            dispatch(&button, "mouseleave");
            assert_eq!(transform_of(&button), "");
        }
    }

    #[wasm_bindgen_test]
    fn release_without_press_leaves_style_empty() {
        let root = fixture(r#"<button class="btn">Run</button>"#);
        let (attacher, _) = counting_attacher();
        attacher.attach(&root).unwrap();

        let button = root.query_selector(".btn").unwrap().unwrap();
        dispatch(&button, "mouseup");
        dispatch(&button, "mouseleave");
        assert_eq!(transform_of(&button), "");
    }

    #[wasm_bindgen_test]
    fn no_buttons_is_not_an_error() {
        let root = fixture("<p>nothing to press</p>");
        let (attacher, reloads) = counting_attacher();
        let report = attacher.attach(&root).unwrap();
        assert_eq!(report, AttachReport::default());
        assert_eq!(reloads.get(), 0);
    }

    #[wasm_bindgen_test]
    fn logo_click_reloads_once() {
        let root = fixture(r#"<div class="logo">logo</div>"#);
        let (attacher, reloads) = counting_attacher();
        let report = attacher.attach(&root).unwrap();
        assert_eq!(report.reload_targets, 1);

        click(&root.query_selector(".logo").unwrap().unwrap());
        assert_eq!(reloads.get(), 1);
    }

    #[wasm_bindgen_test]
    fn title_block_click_reloads_once() {
        let root = fixture(r#"<div class="title-block"><h1>Title</h1></div>"#);
        let (attacher, reloads) = counting_attacher();
        let report = attacher.attach(&root).unwrap();
        assert_eq!(report.reload_targets, 1);

        click(&root.query_selector(".title-block").unwrap().unwrap());
        assert_eq!(reloads.get(), 1);
    }

    #[wasm_bindgen_test]
    fn missing_header_elements_are_skipped() {
        let root = fixture(r#"<button class="btn">Run</button>"#);
        let (attacher, reloads) = counting_attacher();
        let report = attacher.attach(&root).unwrap();
        assert_eq!(report.reload_targets, 0);

        click(&root.query_selector(".btn").unwrap().unwrap());
        assert_eq!(reloads.get(), 0);
    }

    #[wasm_bindgen_test]
    fn second_attach_adds_no_listeners() {
        let root = fixture(r#"<div class="logo">logo</div><button class="btn">Run</button>"#);
        let (attacher, reloads) = counting_attacher();
        attacher.attach(&root).unwrap();
        assert!(attacher.is_attached());

        let again = attacher.attach(&root).unwrap();
        assert_eq!(again, AttachReport::default());

        click(&root.query_selector(".logo").unwrap().unwrap());
        assert_eq!(reloads.get(), 1);
    }

    /// The only test that touches the page-wide attacher; the guard it
    /// exercises lives for the whole test run.
    #[wasm_bindgen_test]
    fn page_install_attaches_once() {
        let root = fixture(
            r#"<div class="logo">logo</div><div class="title-block">t</div><button class="btn">Run</button>"#,
        );
        let (attacher, reloads) = counting_attacher();
        let (ignored, ignored_reloads) = counting_attacher();

        install_with(attacher);
        install_with(ignored);
        install();

        let document = web_sys::window().unwrap().document().unwrap();
        let ready = Event::new("DOMContentLoaded").unwrap();
        document.dispatch_event(&ready).unwrap();

        // The page attacher binds the first match in the whole document.
        click(&document.query_selector(".logo").unwrap().unwrap());
        assert_eq!(reloads.get(), 1);
        click(&document.query_selector(".title-block").unwrap().unwrap());
        assert_eq!(reloads.get(), 2);
        assert_eq!(ignored_reloads.get(), 0);

        let button = root.query_selector(".btn").unwrap().unwrap();
        dispatch(&button, "mousedown");
        assert_eq!(transform_of(&button), PRESSED_TRANSFORM);
        dispatch(&button, "mouseup");
        assert_eq!(transform_of(&button), "");
    }
}
