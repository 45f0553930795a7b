//! Watermark configuration types.
//!
//! Two layers:
//!
//! - [`WatermarkSettings`] is what the YAML file says, parsed leniently
//! - [`WatermarkConfig`] is the validated, immutable value every `apply()`
//!   call reads. Files are checked for existence once, here, and bad values
//!   fall back to defaults with a warning.
//!
//! Only an unknown layout variant is a hard error.

use super::canvas::Edge;
use super::WatermarkError;
use crate::constants::{
    BUILTIN_FONT_COUNT, DEFAULT_BUILTIN_FONT, DEFAULT_PANEL_HEIGHT, DEFAULT_PANEL_WIDTH,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// Default values
fn default_variant() -> String {
    "default".to_string()
}

fn default_font() -> FontSetting {
    FontSetting::Index(DEFAULT_BUILTIN_FONT as i64)
}

fn default_width() -> i64 {
    DEFAULT_PANEL_WIDTH as i64
}

fn default_height() -> i64 {
    DEFAULT_PANEL_HEIGHT as i64
}

/// Layout variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Corner panel inset 1/4 of the image height from the top or bottom.
    Default,
    /// Full-width panel over one edge of the image.
    Inside,
    /// Full-width panel on rows added to one edge of the image.
    Outside,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Inside => "inside",
            Self::Outside => "outside",
        }
    }

    /// Whether this variant prefers the full-width panel geometry.
    pub fn is_wide(&self) -> bool {
        matches!(self, Self::Inside | Self::Outside)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = WatermarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "inside" => Ok(Self::Inside),
            "outside" => Ok(Self::Outside),
            _ => Err(WatermarkError::Config(format!(
                "Could not load watermark type {}",
                s
            ))),
        }
    }
}

/// Font used for the panel text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSpec {
    /// Index into the built-in font ramp, 1 (smallest) to 5 (largest).
    Builtin(u8),
    /// TrueType/OpenType font file.
    File(PathBuf),
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::Builtin(DEFAULT_BUILTIN_FONT)
    }
}

/// Font as written in YAML: `font: 3` or `font: "/path/font.ttf"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontSetting {
    Index(i64),
    Name(String),
}

/// Which edge/corner the panel is anchored to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Alignment {
    /// Anchor at the top instead of the bottom.
    pub top: bool,
    /// Anchor at the left instead of the right (default variant only).
    pub left: bool,
}

impl Alignment {
    pub fn new(top: bool, left: bool) -> Self {
        Self { top, left }
    }

    /// Parse a position string such as `"top-left"` or `"bottom right"`.
    ///
    /// Anything not mentioning `top` is bottom, anything not mentioning
    /// `left` is right.
    pub fn from_position(position: &str) -> Self {
        let position = position.to_ascii_lowercase();
        Self {
            top: position.contains("top"),
            left: position.contains("left"),
        }
    }

    /// Edge the panel is anchored to.
    pub fn edge(&self) -> Edge {
        if self.top {
            Edge::Top
        } else {
            Edge::Bottom
        }
    }
}

/// Watermark section of the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatermarkSettings {
    /// Layout variant name: default, inside or outside (default: "default")
    #[serde(rename = "type", default = "default_variant")]
    pub variant: String,

    /// Built-in font index 1-5 or a font file path (default: 5)
    #[serde(default = "default_font")]
    pub font: FontSetting,

    /// Logo image path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Preferred panel width in pixels (default: 270)
    #[serde(default = "default_width")]
    pub width: i64,

    /// Preferred panel height in pixels (default: 35)
    #[serde(default = "default_height")]
    pub height: i64,

    /// Anchor the panel at the top (default: false)
    #[serde(default)]
    pub top: bool,

    /// Anchor the panel at the left (default: false)
    #[serde(default)]
    pub left: bool,

    /// Position string such as "top-left"; overrides `top` and `left`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl Default for WatermarkSettings {
    fn default() -> Self {
        Self {
            variant: default_variant(),
            font: default_font(),
            logo: None,
            width: default_width(),
            height: default_height(),
            top: false,
            left: false,
            position: None,
        }
    }
}

impl WatermarkSettings {
    /// Validate the settings without touching the filesystem.
    pub fn validate(&self) -> Result<(), String> {
        self.variant
            .parse::<Variant>()
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

/// Validated watermark configuration.
///
/// Immutable once built; safe to share between concurrent `apply()` calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatermarkConfig {
    pub variant: Variant,
    pub font: FontSpec,
    pub logo: Option<PathBuf>,
    /// Preferred (minimum) panel width.
    pub width: u32,
    /// Preferred (minimum) panel height.
    pub height: u32,
    pub alignment: Alignment,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Default,
            font: FontSpec::default(),
            logo: None,
            width: DEFAULT_PANEL_WIDTH,
            height: DEFAULT_PANEL_HEIGHT,
            alignment: Alignment::default(),
        }
    }
}

impl WatermarkConfig {
    /// Build a validated configuration from file settings.
    ///
    /// Missing font or logo files and non-positive sizes fall back to the
    /// defaults. An unknown variant is a [`WatermarkError::Config`].
    pub fn from_settings(settings: &WatermarkSettings) -> Result<Self, WatermarkError> {
        let variant = settings.variant.parse::<Variant>()?;

        let alignment = match settings.position.as_deref() {
            Some(position) if !position.is_empty() => Alignment::from_position(position),
            _ => Alignment::new(settings.top, settings.left),
        };

        Ok(Self {
            variant,
            font: resolve_font(&settings.font),
            logo: settings.logo.as_deref().and_then(resolve_logo),
            width: resolve_size("width", settings.width, DEFAULT_PANEL_WIDTH),
            height: resolve_size("height", settings.height, DEFAULT_PANEL_HEIGHT),
            alignment,
        })
    }

    /// Same configuration with a different layout variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }
}

fn resolve_font(setting: &FontSetting) -> FontSpec {
    match setting {
        FontSetting::Index(index) => builtin_font(*index),
        FontSetting::Name(name) => {
            let name = name.trim();
            if let Ok(index) = name.parse::<i64>() {
                return builtin_font(index);
            }

            if !name.is_empty() && Path::new(name).is_file() {
                return FontSpec::File(PathBuf::from(name));
            }

            tracing::warn!(font = %name, "Font file not found, using built-in font");
            FontSpec::default()
        }
    }
}

fn builtin_font(index: i64) -> FontSpec {
    if (1..=BUILTIN_FONT_COUNT as i64).contains(&index) {
        FontSpec::Builtin(index as u8)
    } else {
        tracing::warn!(font = index, "Built-in font index out of range, using default");
        FontSpec::default()
    }
}

fn resolve_logo(logo: &str) -> Option<PathBuf> {
    if logo.is_empty() {
        return None;
    }

    let path = Path::new(logo);
    if path.is_file() {
        Some(path.to_path_buf())
    } else {
        tracing::warn!(logo = %logo, "Logo file not found, watermark will have no logo");
        None
    }
}

fn resolve_size(field: &'static str, value: i64, default: u32) -> u32 {
    match u32::try_from(value) {
        Ok(size) if size > 0 => size,
        _ => {
            tracing::warn!(field, value, default, "Panel size must be positive, using default");
            default
        }
    }
}
