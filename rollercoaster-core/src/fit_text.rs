//! Shrink-to-fit font sizing for headline lines sharing one container.
//!
//! A run happens in two halves with a layout flush in between:
//! [`FitText::begin`] yields the base pixel size every line element must be
//! reset to, and [`FitText::finish`] takes the widths measured afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_BASE_FONT_VW: f64 = 15.0;
pub const DEFAULT_PADDING_PX: f64 = 32.0;
pub const DEFAULT_FONT_FALLBACK_DELAY_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitTextConfig {
    /// Largest font size, in percent of the viewport width.
    #[serde(default = "default_base_font_vw")]
    pub base_font_vw: f64,
    /// Horizontal padding of the container, subtracted from its width.
    #[serde(default = "default_padding_px")]
    pub padding_px: f64,
    /// Re-fit this long after mount in case the font-ready signal never fires.
    #[serde(default = "default_font_fallback_delay_ms")]
    pub font_fallback_delay_ms: u32,
}

const fn default_base_font_vw() -> f64 {
    DEFAULT_BASE_FONT_VW
}

const fn default_padding_px() -> f64 {
    DEFAULT_PADDING_PX
}

const fn default_font_fallback_delay_ms() -> u32 {
    DEFAULT_FONT_FALLBACK_DELAY_MS
}

impl Default for FitTextConfig {
    fn default() -> Self {
        Self {
            base_font_vw: DEFAULT_BASE_FONT_VW,
            padding_px: DEFAULT_PADDING_PX,
            font_fallback_delay_ms: DEFAULT_FONT_FALLBACK_DELAY_MS,
        }
    }
}

impl FitTextConfig {
    #[must_use]
    pub fn base_font_px(&self, viewport_width: f64) -> f64 {
        self.base_font_vw / 100.0 * viewport_width
    }
}

/// A CSS `font-size` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontSize {
    /// Viewport-relative, used before the first successful fit.
    Vw(f64),
    Px(f64),
}

impl FontSize {
    #[must_use]
    pub const fn as_px(self) -> Option<f64> {
        match self {
            Self::Px(px) => Some(px),
            Self::Vw(_) => None,
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vw(v) => write!(f, "{v}vw"),
            Self::Px(px) => write!(f, "{px}px"),
        }
    }
}

/// Rendered geometry of one line, read after the reset took effect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineMeasurement {
    pub text_width: f64,
    pub margin_left: f64,
}

/// Inputs captured when a run starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitPass {
    base_px: f64,
    container_width: f64,
}

impl FitPass {
    #[must_use]
    pub const fn base_px(&self) -> f64 {
        self.base_px
    }

    #[must_use]
    pub const fn container_width(&self) -> f64 {
        self.container_width
    }
}

/// Font size for one line, or `None` when it cannot be measured yet.
#[must_use]
pub fn fit_line(
    base_px: f64,
    container_width: f64,
    padding_px: f64,
    line: LineMeasurement,
) -> Option<f64> {
    let available = container_width - padding_px - line.margin_left;
    if line.text_width > 0.0 && available > 0.0 {
        let scale = available / line.text_width;
        Some((base_px * scale).min(base_px))
    } else {
        None
    }
}

/// Parse a computed CSS length the way `parseFloat` does: leading number,
/// anything after it ignored, `0.0` when there is no number at all.
#[must_use]
pub fn parse_css_px(value: &str) -> f64 {
    let trimmed = value.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '+' | '-' if idx == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            c if c.is_ascii_digit() => seen_digit = true,
            _ => break,
        }
        end = idx + ch.len_utf8();
    }
    if !seen_digit {
        return 0.0;
    }
    trimmed[..end].parse().unwrap_or(0.0)
}

/// Per-line font sizes for a fixed set of lines.
#[derive(Debug, Clone, PartialEq)]
pub struct FitText {
    config: FitTextConfig,
    sizes: Vec<FontSize>,
}

impl FitText {
    #[must_use]
    pub fn new(line_count: usize, config: FitTextConfig) -> Self {
        Self {
            config,
            sizes: vec![FontSize::Vw(config.base_font_vw); line_count],
        }
    }

    #[must_use]
    pub const fn config(&self) -> &FitTextConfig {
        &self.config
    }

    #[must_use]
    pub fn sizes(&self) -> &[FontSize] {
        &self.sizes
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.sizes.len()
    }

    /// Start a run. `None` when the container is not mounted, in which case
    /// nothing should be reset or measured.
    #[must_use]
    pub fn begin(&self, viewport_width: f64, container_width: Option<f64>) -> Option<FitPass> {
        let container_width = container_width?;
        Some(FitPass {
            base_px: self.config.base_font_px(viewport_width),
            container_width,
        })
    }

    /// Apply measurements taken after the reset. Lines without a measurement
    /// (element not mounted) or without room keep their previous size.
    /// Returns whether any size changed.
    pub fn finish(&mut self, pass: &FitPass, measurements: &[Option<LineMeasurement>]) -> bool {
        let mut changed = false;
        for (size, measured) in self.sizes.iter_mut().zip(measurements) {
            let Some(line) = measured else {
                continue;
            };
            let Some(px) = fit_line(
                pass.base_px,
                pass.container_width,
                self.config.padding_px,
                *line,
            ) else {
                continue;
            };
            let next = FontSize::Px(px);
            if *size != next {
                *size = next;
                changed = true;
            }
        }
        changed
    }
}
