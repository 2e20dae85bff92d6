use crate::i18n::locales::{LOCALE_STORAGE_KEY, is_supported, load_translations};
use serde_json::Value;
use std::cell::RefCell;

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    if !is_supported(lang) {
        return None;
    }
    let fallback = load_translations("en")?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations("en").unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: "en".to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

fn initial_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        if let Some(saved) = crate::dom::local_storage()
            .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
        {
            return saved;
        }
    }

    crate::config::site_config().default_locale.clone()
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = initial_lang();
        build_bundle(&initial).unwrap_or_else(fallback_bundle)
    });
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

fn replace_bundle(bundle: I18nBundle) {
    CURRENT.with(|cell| cell.replace(bundle));
}

/// Set the current language for internationalization
///
/// Changes the active language bundle and updates the DOM `lang` attribute.
/// Persists the language choice to localStorage for future sessions.
/// Unknown codes are ignored.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("ignoring unsupported locale {lang}");
        return;
    };
    replace_bundle(bundle);

    if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
        let _ = el.set_attribute("lang", lang);
    }
    if let Some(storage) = crate::dom::local_storage() {
        let _ = storage.set_item(LOCALE_STORAGE_KEY, lang);
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}
