// ethylene-ui/src/components/site_header.rs
use leptos::*;

#[component]
fn AvocadoIcon() -> impl IntoView {
    view! {
        <svg width="40" height="40" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
            <path d="M12 2c-3 0-5 4-6 8-1.3 5 1 12 6 12s7.3-7 6-12c-1-4-3-8-6-8z" fill="#7cb342"/>
            <circle cx="12" cy="15" r="3.2" fill="#6d4c41"/>
        </svg>
    }
}

/// Page header. Clicking the logo or the title reloads the page; the
/// handlers are attached by `feedback::install` via the `logo` and
/// `title-block` classes.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="logo" title="Reload">
                <AvocadoIcon />
            </div>
            <div class="title-block" title="Reload">
                <h1>"Avocado Packaging Simulator"</h1>
                <p class="subtitle">
                    "Headspace O₂, CO₂ and ethylene in perforated packages with an ethylene scavenger"
                </p>
            </div>
        </header>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn header_exposes_reload_targets() {
        let document = web_sys::window().unwrap().document().unwrap();
        let container: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&container).unwrap();

        mount_to(container.clone(), SiteHeader);

        for selector in [".logo", ".title-block"] {
            let target = container.query_selector(selector).unwrap().unwrap();
            assert_eq!(target.get_attribute("title").as_deref(), Some("Reload"));
        }
    }
}
