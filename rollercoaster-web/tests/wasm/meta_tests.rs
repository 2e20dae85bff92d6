use rollercoaster_core::SiteConfig;
use rollercoaster_web::config::apply_document_meta;
use rollercoaster_web::dom;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn site_config_names_the_document() {
    let site = SiteConfig {
        name: "Rollercoaster staging".into(),
        description: "Testing the description tag".into(),
        ..SiteConfig::default()
    };
    apply_document_meta(&site);
    apply_document_meta(&site);

    let doc = dom::document().expect("document");
    assert_eq!(doc.title(), "Rollercoaster staging");
    let metas = doc
        .query_selector_all("meta[name=\"description\"]")
        .expect("query metas");
    assert_eq!(metas.length(), 1, "a second call reuses the tag");
    let meta = doc
        .query_selector("meta[name=\"description\"]")
        .expect("query meta")
        .expect("description tag present");
    assert_eq!(
        meta.get_attribute("content").as_deref(),
        Some("Testing the description tag")
    );
}
