use serde_json::Value;

/// `localStorage` key holding the visitor's chosen locale.
pub const LOCALE_STORAGE_KEY: &str = "rc.locale";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
    },
    LocaleMeta {
        code: "de",
        name: "Deutsch",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/en.json")),
    ("de", include_str!("../../i18n/de.json")),
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang)
}

/// Parsed bundle for `lang`, English for unknown codes.
pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    match serde_json::from_str(bundle) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("translation bundle {lang} is not valid JSON: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_has_metadata() {
        for (code, _) in LOCALE_TABLE {
            assert!(is_supported(code), "{code} missing from LOCALE_META");
            assert!(load_translations(code).is_some());
        }
        assert!(!is_supported("xx"));
    }
}
