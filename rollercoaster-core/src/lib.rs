//! Rollercoaster landing page core
//!
//! Platform-agnostic logic for the landing page: badge persistence, fit-text
//! sizing and content shapes. Nothing here touches the browser; the web crate
//! supplies storage and measurements through the types exported below.

pub mod badges;
pub mod config;
pub mod content;
pub mod fit_text;
pub mod storage;

pub use badges::{BadgeMap, BadgeStore, STORAGE_PREFIX, storage_key};
pub use config::{ConfigError, SiteConfig};
pub use content::{
    Accent, BadgeKey, Question, SlideFrom, Story, StoryRecord, TextSegment, UnknownBadgeKey,
    questions_from_value, split_emphasis, stories_from_value,
};
pub use fit_text::{
    FitPass, FitText, FitTextConfig, FontSize, LineMeasurement, fit_line, parse_css_px,
};
pub use storage::{KeyValueStorage, MemoryStorage};
