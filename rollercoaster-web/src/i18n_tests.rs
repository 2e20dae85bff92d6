//! Locale bundles must agree on shape so fallback never hides a gap.

use serde_json::Value;
use std::collections::BTreeSet;

fn locale_codes() -> Vec<String> {
    let mut locales = Vec::new();
    let entries = std::fs::read_dir("i18n").expect("i18n directory should exist");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            locales.push(stem.to_string());
        }
    }
    locales.sort();
    locales
}

fn load_locale(locale: &str) -> (String, Value) {
    let path = format!("i18n/{locale}.json");
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {path}"));
    let json: Value =
        serde_json::from_str(&content).unwrap_or_else(|_| panic!("Failed to parse JSON in {path}"));
    (content, json)
}

fn collect_keys(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let next_prefix = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            if v.is_object() {
                collect_keys(&next_prefix, v, out);
            } else {
                out.insert(next_prefix);
            }
        }
    }
}

fn lookup<'a>(json: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(json, |current, part| current.get(part))
}

#[test]
fn every_bundle_is_registered() {
    let registered: Vec<&str> = crate::i18n::locales().iter().map(|m| m.code).collect();
    for code in locale_codes() {
        assert!(registered.contains(&code.as_str()), "{code}.json is not registered");
    }
}

#[test]
fn locales_have_matching_keys() {
    let (_, base_json) = load_locale("en");
    let mut base_keys = BTreeSet::new();
    collect_keys("", &base_json, &mut base_keys);

    for locale in locale_codes() {
        let (_, json) = load_locale(&locale);
        let mut keys = BTreeSet::new();
        collect_keys("", &json, &mut keys);
        for key in &base_keys {
            assert!(
                keys.contains(key),
                "Missing key '{key}' in locale '{locale}'"
            );
        }
    }
}

#[test]
fn content_lists_line_up_across_locales() {
    let (_, base_json) = load_locale("en");
    for locale in locale_codes() {
        let (_, json) = load_locale(&locale);
        for key in ["hero.lines", "stories.items", "questions.items"] {
            let base_len = lookup(&base_json, key).and_then(Value::as_array).map(Vec::len);
            let len = lookup(&json, key).and_then(Value::as_array).map(Vec::len);
            assert!(len.is_some(), "'{key}' is not a list in locale '{locale}'");
            assert_eq!(len, base_len, "'{key}' length differs in locale '{locale}'");
        }
    }
}

#[test]
fn locales_have_balanced_templates() {
    for locale in locale_codes() {
        let (content, _json) = load_locale(&locale);
        let open_count = content.matches('{').count();
        let close_count = content.matches('}').count();
        assert_eq!(
            open_count, close_count,
            "Unmatched braces in {locale}: {open_count} open, {close_count} close"
        );
        assert!(
            !content.contains("{{{"),
            "Found triple opening brace in {locale}"
        );
    }
}
