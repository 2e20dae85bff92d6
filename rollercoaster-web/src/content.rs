//! Content provider: stories and questions for the active locale.

use crate::i18n;
use rollercoaster_core::{BadgeKey, Question, Story, questions_from_value, stories_from_value};

/// Stories in the active locale, empty if the bundle is malformed.
#[must_use]
pub fn stories() -> Vec<Story> {
    stories_from_value(&i18n::t_value("stories.items"))
}

/// Questions in the active locale, each paired with its badge.
#[must_use]
pub fn questions() -> Vec<Question> {
    questions_from_value(&i18n::t_value("questions.items"))
}

/// Hero headline, one entry per line.
#[must_use]
pub fn hero_lines() -> Vec<String> {
    match i18n::t_value("hero.lines") {
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        other => {
            log::warn!("hero lines are not a list: {other}");
            Vec::new()
        }
    }
}

/// Localized badge name, or the built-in English name when the bundle has none.
#[must_use]
pub fn badge_name(key: BadgeKey) -> String {
    let path = format!("badges.names.{}", key.as_str());
    let name = i18n::t(&path);
    if name == path {
        key.display_name().to_string()
    } else {
        name
    }
}

/// Name to show for a stored key, which may predate the current vocabulary.
#[must_use]
pub fn stored_badge_name(raw_key: &str) -> String {
    raw_key
        .parse::<BadgeKey>()
        .map_or_else(|_| raw_key.to_string(), badge_name)
}
