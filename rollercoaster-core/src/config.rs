use crate::fit_text::FitTextConfig;
use serde::{Deserialize, Serialize};

/// Site-wide settings shipped as static JSON next to the web bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_locale")]
    pub default_locale: String,
    #[serde(default)]
    pub fit_text: FitTextConfig,
}

fn default_name() -> String {
    "Rollercoaster.dev".to_string()
}

fn default_url() -> String {
    "https://rollercoaster.dev".to_string()
}

fn default_description() -> String {
    "Progress tracking for minds that don't move in straight lines".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            url: default_url(),
            description: default_description(),
            default_locale: default_locale(),
            fit_text: FitTextConfig::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("fit-text base size must be positive, got {0}")]
    BaseFontSize(f64),
}

impl SiteConfig {
    /// Parse and validate a site config document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the fit-text base size
    /// is not a positive number.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.fit_text.base_font_vw <= 0.0 || !config.fit_text.base_font_vw.is_finite() {
            return Err(ConfigError::BaseFontSize(config.fit_text.base_font_vw));
        }
        Ok(config)
    }

    /// Like [`SiteConfig::from_json`], but logs and falls back to defaults.
    #[must_use]
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|err| {
            log::warn!("{err}; using default site config");
            Self::default()
        })
    }
}
