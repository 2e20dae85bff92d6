mod bundle;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_lang, set_lang};
pub use locales::{LOCALE_STORAGE_KEY, LocaleMeta, locales};
pub use render::{t, t_value, tr};
