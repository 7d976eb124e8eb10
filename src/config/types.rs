//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::export::submit::{DEFAULT_CONTEXT, DEFAULT_ENDPOINT, DEFAULT_USER_QUERY};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Raster surface settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Surface height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Board fill, also painted by the eraser and by clear
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Pen and text color
    #[serde(default = "default_foreground")]
    pub foreground: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
            foreground: default_foreground(),
        }
    }
}

/// Drawing tool defaults.
///
/// Widths can still be changed at runtime; these are the starting values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Pen width in pixels (valid range: 1 - 100)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: u32,

    /// Eraser width in pixels (valid range: 1 - 200)
    #[serde(default = "default_eraser_width")]
    pub eraser_width: u32,

    /// Render strokes as quadratic curves
    #[serde(default)]
    pub smoothing: bool,

    /// Font family name for text annotations (e.g., "Sans", "Monospace")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Font size in points (valid range: 8.0 - 72.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            stroke_width: default_stroke_width(),
            eraser_width: default_eraser_width(),
            smoothing: false,
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            font_size: default_font_size(),
        }
    }
}

/// Download settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory downloads are written to (supports `~`); defaults to the
    /// user's download directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<String>,

    /// Download filename, must end in `.png`
    #[serde(default = "default_filename")]
    pub filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            download_dir: None,
            filename: default_filename(),
        }
    }
}

/// Remote interpretation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SubmitSettings {
    /// URL the image is POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Sent as `user_query`
    #[serde(default = "default_user_query")]
    pub user_query: String,

    /// Sent as `meta.context`
    #[serde(default = "default_context")]
    pub context: String,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_query: default_user_query(),
            context: default_context(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> u32 {
    crate::draw::DEFAULT_WIDTH
}

fn default_height() -> u32 {
    crate::draw::DEFAULT_HEIGHT
}

pub(super) fn default_background() -> ColorSpec {
    ColorSpec::Name("#202020".to_string())
}

pub(super) fn default_foreground() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_stroke_width() -> u32 {
    5
}

fn default_eraser_width() -> u32 {
    40
}

fn default_font_family() -> String {
    "Sans".to_string()
}

pub(super) fn default_font_weight() -> String {
    "bold".to_string()
}

pub(super) fn default_font_style() -> String {
    "normal".to_string()
}

fn default_font_size() -> f64 {
    24.0
}

pub(super) fn default_filename() -> String {
    crate::export::file::DEFAULT_FILENAME.to_string()
}

pub(super) fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_user_query() -> String {
    DEFAULT_USER_QUERY.to_string()
}

fn default_context() -> String {
    DEFAULT_CONTEXT.to_string()
}
