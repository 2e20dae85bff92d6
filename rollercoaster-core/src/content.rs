//! Landing page content shapes.
//!
//! Text comes from the translation bundles; layout (accent colour, margins,
//! slide direction) and badge identity are fixed per position and do not
//! vary by locale.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeKey {
    QuietVictory,
    ThreadFinder,
    SkillBuilder,
    KnowledgeSharer,
}

impl BadgeKey {
    /// Question order: the n-th question earns the n-th badge.
    pub const ALL: [Self; 4] = [
        Self::QuietVictory,
        Self::ThreadFinder,
        Self::SkillBuilder,
        Self::KnowledgeSharer,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QuietVictory => "quiet-victory",
            Self::ThreadFinder => "thread-finder",
            Self::SkillBuilder => "skill-builder",
            Self::KnowledgeSharer => "knowledge-sharer",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::QuietVictory => "Quiet Victory",
            Self::ThreadFinder => "Thread Finder",
            Self::SkillBuilder => "Skill Builder",
            Self::KnowledgeSharer => "Knowledge Sharer",
        }
    }
}

impl fmt::Display for BadgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown badge key: {0}")]
pub struct UnknownBadgeKey(pub String);

impl FromStr for BadgeKey {
    type Err = UnknownBadgeKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownBadgeKey(s.to_string()))
    }
}

/// One of the four brand accent colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accent(u8);

impl Accent {
    /// Accent for the n-th card (zero based), cycling 1..=4.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn for_position(index: usize) -> Self {
        Self((index % 4) as u8 + 1)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// CSS class, e.g. `accent-2`.
    #[must_use]
    pub fn class(self) -> String {
        format!("accent-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideFrom {
    Left,
    Right,
}

impl SlideFrom {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

const STORY_MARGINS: [&str; 4] = ["0", "15%", "5%", "20%"];

const QUESTION_LAYOUT: [(SlideFrom, &str); 4] = [
    (SlideFrom::Left, "0"),
    (SlideFrom::Right, "auto"),
    (SlideFrom::Left, "5%"),
    (SlideFrom::Left, "15%"),
];

/// Story as supplied by the translation bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRecord {
    pub name: String,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub name: String,
    pub title: String,
    pub text: String,
    pub accent: Accent,
    pub margin_left: &'static str,
}

impl Story {
    #[must_use]
    pub fn from_record(index: usize, record: StoryRecord) -> Self {
        Self {
            name: record.name,
            title: record.title,
            text: record.text,
            accent: Accent::for_position(index),
            margin_left: STORY_MARGINS[index % STORY_MARGINS.len()],
        }
    }

    #[must_use]
    pub fn segments(&self) -> Vec<TextSegment> {
        split_emphasis(&self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub badge_key: BadgeKey,
    pub accent: Accent,
    pub slide_from: SlideFrom,
    pub margin_left: &'static str,
}

/// Decode the provider's story list. Anything that is not an array of
/// `{name, title, text}` records yields no stories and a warning.
#[must_use]
pub fn stories_from_value(value: &Value) -> Vec<Story> {
    if !value.is_array() {
        log::warn!("story content is not a list, got {}", json_kind(value));
        return Vec::new();
    }
    match serde_json::from_value::<Vec<StoryRecord>>(value.clone()) {
        Ok(records) => records
            .into_iter()
            .enumerate()
            .map(|(idx, record)| Story::from_record(idx, record))
            .collect(),
        Err(err) => {
            log::warn!("story content is malformed: {err}");
            Vec::new()
        }
    }
}

/// Decode the provider's question list and pair it with badge keys by
/// position. Only the overlap of questions and keys is kept.
#[must_use]
pub fn questions_from_value(value: &Value) -> Vec<Question> {
    let Some(items) = value.as_array() else {
        log::warn!("question content is not a list, got {}", json_kind(value));
        return Vec::new();
    };
    let texts: Option<Vec<&str>> = items.iter().map(Value::as_str).collect();
    let Some(texts) = texts else {
        log::warn!("question content contains non-text entries");
        return Vec::new();
    };
    texts
        .into_iter()
        .zip(BadgeKey::ALL)
        .zip(QUESTION_LAYOUT)
        .enumerate()
        .map(|(idx, ((text, badge_key), (slide_from, margin_left)))| Question {
            text: text.to_string(),
            badge_key,
            accent: Accent::for_position(idx),
            slide_from,
            margin_left,
        })
        .collect()
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Piece of story text with its emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSegment {
    Plain(String),
    Strong(String),
}

static STRONG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<strong>(.*?)</strong>").expect("valid emphasis pattern"));

/// Split `<strong>` markup out of translated text so it can be rendered
/// without injecting raw HTML. Unmatched tags stay as plain text.
#[must_use]
pub fn split_emphasis(text: &str) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut last = 0;
    for caps in STRONG.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            segments.push(TextSegment::Plain(text[last..whole.start()].to_string()));
        }
        segments.push(TextSegment::Strong(inner.as_str().to_string()));
        last = whole.end();
    }
    if last < text.len() {
        segments.push(TextSegment::Plain(text[last..].to_string()));
    }
    segments
}
