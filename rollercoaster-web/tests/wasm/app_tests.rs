use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

use rollercoaster_web::app::App;
use rollercoaster_web::dom;

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn next_tick() {
    yew::platform::time::sleep(Duration::from_millis(50)).await;
}

#[wasm_bindgen_test]
async fn app_mounts_landing_page() {
    rollercoaster_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
    next_tick().await;

    let doc = dom::document().expect("document");
    assert!(doc.get_element_by_id("main").is_some());
    assert!(doc.get_element_by_id("lang-select").is_some());
    assert!(doc.get_element_by_id("question-quiet-victory").is_some());
    let status = doc
        .get_element_by_id("badge-status")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .expect("status region");
    assert_eq!(status.get_attribute("aria-live").as_deref(), Some("polite"));
}
