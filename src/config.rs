//! Serializable generator configuration.
//!
//! A [`GeneratorConfig`] captures everything the output driver needs: where
//! to write, which sizes, and what to draw. Every field has a default, so an
//! empty JSON object reproduces the stock clock icons.
//!
//! # Example
//!
//! ```
//! use clock_icon_renderer::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_json(r#"{ "sizes": [16, 64] }"#).unwrap();
//! assert_eq!(config.sizes, vec![16, 64]);
//! assert_eq!(config.output_dir.to_str(), Some("icons"));
//!
//! let json = config.to_json().unwrap();
//! let restored = GeneratorConfig::from_json(&json).unwrap();
//! assert_eq!(restored.sizes, config.sizes);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::renderer::{IconRenderer, IconSource};
use crate::style::{self, ClockStyle};
use crate::svg::SvgSource;

/// Icon sizes written when nothing else is configured.
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 128];

pub const DEFAULT_OUTPUT_DIR: &str = "icons";

pub const DEFAULT_FILE_PREFIX: &str = "icon";

// ============================================================================
// Serializable SVG Source
// ============================================================================

/// Serializable representation of an SVG master.
///
/// Serializes to a flat structure with either `svgData` or `svgPath`:
///
/// ```json
/// { "svgData": "<svg>...</svg>" }
/// // or
/// { "svgPath": "images/icon.svg" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourceSettings {
    /// Raw SVG markup (takes precedence over `svg_path`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg_data: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg_path: Option<PathBuf>,
}

impl SourceSettings {
    pub fn from_svg(svg: impl Into<String>) -> Self {
        Self {
            svg_data: Some(svg.into()),
            svg_path: None,
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            svg_data: None,
            svg_path: Some(path.into()),
        }
    }

    /// Returns `None` when neither field is set.
    pub fn to_source(&self) -> Option<SvgSource> {
        if let Some(svg) = &self.svg_data {
            Some(SvgSource::Raw(svg.clone()))
        } else {
            self.svg_path.clone().map(SvgSource::File)
        }
    }
}

impl From<&SvgSource> for SourceSettings {
    fn from(source: &SvgSource) -> Self {
        match source {
            SvgSource::Raw(svg) => Self::from_svg(svg),
            SvgSource::File(path) => Self::from_path(path),
        }
    }
}

// ============================================================================
// Style Settings (Serializable)
// ============================================================================

/// Serializable clock colors as hex strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleSettings {
    pub face_color: String,
    pub hand_color: String,
}

impl Default for StyleSettings {
    fn default() -> Self {
        (&ClockStyle::default()).into()
    }
}

impl From<&ClockStyle> for StyleSettings {
    fn from(style: &ClockStyle) -> Self {
        Self {
            face_color: style::to_hex(style.face),
            hand_color: style::to_hex(style.hands),
        }
    }
}

impl TryFrom<&StyleSettings> for ClockStyle {
    type Error = Error;

    fn try_from(settings: &StyleSettings) -> Result<Self> {
        ClockStyle::from_hex(&settings.face_color, &settings.hand_color)
    }
}

// ============================================================================
// GeneratorConfig
// ============================================================================

/// Settings for one generator run.
///
/// # JSON Format
///
/// ```json
/// {
///   "outputDir": "icons",
///   "sizes": [16, 32, 48, 128],
///   "filePrefix": "icon",
///   "style": {
///     "faceColor": "#3498db",
///     "handColor": "#2c3e50"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,

    /// Edge lengths to render, in output order.
    pub sizes: Vec<u32>,

    /// Files are named `<prefix><size>.png`.
    pub file_prefix: String,

    pub style: StyleSettings,

    /// SVG master to draw instead of the clock face. `None` means the clock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceSettings>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: DEFAULT_SIZES.to_vec(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            style: StyleSettings::default(),
            source: None,
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the sizes to render.
    pub fn with_sizes(mut self, sizes: impl Into<Vec<u32>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// Sets an SVG master.
    pub fn with_source(mut self, source: SourceSettings) -> Self {
        self.source = Some(source);
        self
    }

    /// Builds the renderer this configuration describes.
    ///
    /// An SVG source wins over the clock style when both are present.
    pub fn renderer(&self) -> Result<IconRenderer> {
        let source = match self.source.as_ref().and_then(SourceSettings::to_source) {
            Some(svg) => IconSource::Svg(svg),
            None => IconSource::Clock(ClockStyle::try_from(&self.style)?),
        };
        Ok(IconRenderer::new(source))
    }

    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the config to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::ReadSource {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

// ============================================================================
// Tests
// ============================================================================
