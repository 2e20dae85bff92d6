//! Static site configuration bundled with the page.

use rollercoaster_core::SiteConfig;
use std::sync::OnceLock;

static SITE: OnceLock<SiteConfig> = OnceLock::new();

/// Site config parsed from `static/site.json`, defaults if it is broken.
#[must_use]
pub fn site_config() -> &'static SiteConfig {
    SITE.get_or_init(|| SiteConfig::from_json_or_default(include_str!("../static/site.json")))
}

/// Base path for the router (e.g. `/landing` when hosted under a subdirectory).
///
/// Taken from `PUBLIC_URL` at compile time; `None` falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    normalize_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Title the document with the site name and set its meta description,
/// adding the `<meta>` tag when the page shell has none.
pub fn apply_document_meta(site: &SiteConfig) {
    let Some(doc) = crate::dom::document() else {
        return;
    };
    doc.set_title(&site.name);

    let meta = match doc.query_selector("meta[name=\"description\"]") {
        Ok(Some(meta)) => meta,
        Ok(None) => {
            let Ok(meta) = doc.create_element("meta") else {
                return;
            };
            let _ = meta.set_attribute("name", "description");
            if let Some(head) = doc.head() {
                let _ = head.append_child(&meta);
            }
            meta
        }
        Err(err) => {
            log::warn!(
                "description lookup failed: {}",
                crate::dom::js_error_message(&err)
            );
            return;
        }
    };
    let _ = meta.set_attribute("content", &site.description);
}

fn normalize_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}
