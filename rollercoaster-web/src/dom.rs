use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, Storage, Window};

/// Global `window`, absent outside a browser (native tests, SSR).
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Browser `localStorage`, if this environment has one and allows access.
#[must_use]
pub fn local_storage() -> Option<Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Current viewport width in CSS pixels, `0.0` when unknown.
#[must_use]
pub fn viewport_width() -> f64 {
    window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

/// Computed `margin-left` of an element in pixels.
#[must_use]
pub fn computed_margin_left(el: &HtmlElement) -> f64 {
    window()
        .and_then(|win| win.get_computed_style(el).ok().flatten())
        .and_then(|style| style.get_property_value("margin-left").ok())
        .map_or(0.0, |raw| rollercoaster_core::parse_css_px(&raw))
}

/// Resolve once the document's web fonts have finished loading.
///
/// # Errors
/// Returns an error if the font set promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fonts_ready() -> Result<(), JsValue> {
    let Some(doc) = document() else {
        return Ok(());
    };
    JsFuture::from(doc.fonts().ready()?).await?;
    Ok(())
}
