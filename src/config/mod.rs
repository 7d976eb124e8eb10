//! Configuration file support for slateboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/slateboard/config.toml`. Settings include the canvas size and
//! colors, drawing defaults, the download location and the submit endpoint.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, ExportConfig, SubmitSettings};

use crate::draw::{BOARD, FontDescriptor, Palette, StyleParams, WHITE};
use crate::export::file::default_download_dir;
use crate::export::{DownloadConfig, SubmitConfig};
use crate::util::expand_tilde;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Example configuration written by [`Config::create_default_file`].
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

/// Whether `endpoint` is an absolute `http` or `https` URL.
pub fn is_valid_endpoint(endpoint: &str) -> bool {
    url::Url::parse(endpoint).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 1200
/// height = 700
/// background = "#202020"
///
/// [drawing]
/// stroke_width = 5
/// eraser_width = 40
/// smoothing = true
///
/// [submit]
/// endpoint = "https://example.com/image"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Surface size and colors
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Drawing tool defaults (widths, smoothing, font)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Download location and filename
    #[serde(default)]
    pub export: ExportConfig,

    /// Remote interpretation endpoint
    #[serde(default)]
    pub submit: SubmitSettings,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value, or reset to their
    /// default, and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    /// - `drawing.stroke_width`: 1 - 100
    /// - `drawing.eraser_width`: 1 - 200
    /// - `drawing.font_size`: 8.0 - 72.0
    fn validate_and_clamp(&mut self) {
        if !(1..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, 8192);
        }

        if !(1..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, 8192);
        }

        if !self.canvas.background.is_valid() {
            log::warn!(
                "Invalid canvas background {:?}, falling back to #202020",
                self.canvas.background
            );
            self.canvas.background = types::default_background();
        }

        if !self.canvas.foreground.is_valid() {
            log::warn!(
                "Invalid canvas foreground {:?}, falling back to white",
                self.canvas.foreground
            );
            self.canvas.foreground = types::default_foreground();
        }

        if !(1..=100).contains(&self.drawing.stroke_width) {
            log::warn!(
                "Invalid stroke_width {}, clamping to 1-100 range",
                self.drawing.stroke_width
            );
            self.drawing.stroke_width = self.drawing.stroke_width.clamp(1, 100);
        }

        if !(1..=200).contains(&self.drawing.eraser_width) {
            log::warn!(
                "Invalid eraser_width {}, clamping to 1-200 range",
                self.drawing.eraser_width
            );
            self.drawing.eraser_width = self.drawing.eraser_width.clamp(1, 200);
        }

        if !(8.0..=72.0).contains(&self.drawing.font_size) {
            log::warn!(
                "Invalid font_size {:.1}, clamping to 8.0-72.0 range",
                self.drawing.font_size
            );
            self.drawing.font_size = if self.drawing.font_size.is_nan() {
                8.0
            } else {
                self.drawing.font_size.clamp(8.0, 72.0)
            };
        }

        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'bold'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = types::default_font_weight();
        }

        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = types::default_font_style();
        }

        let filename = &self.export.filename;
        let valid_filename = filename.to_lowercase().ends_with(".png")
            && filename.len() > ".png".len()
            && !filename.contains(['/', '\\']);
        if !valid_filename {
            log::warn!(
                "Invalid download filename '{}', falling back to '{}'",
                filename,
                types::default_filename()
            );
            self.export.filename = types::default_filename();
        }

        if !is_valid_endpoint(&self.submit.endpoint) {
            log::warn!(
                "Invalid submit endpoint '{}', falling back to '{}'",
                self.submit.endpoint,
                types::default_endpoint()
            );
            self.submit.endpoint = types::default_endpoint();
        }
    }

    /// Foreground/background colors for the board.
    pub fn palette(&self) -> Palette {
        Palette {
            foreground: self.canvas.foreground.to_color(WHITE),
            background: self.canvas.background.to_color(BOARD),
        }
    }

    /// Starting pen/eraser widths and smoothing.
    pub fn style(&self) -> StyleParams {
        StyleParams {
            stroke_width: self.drawing.stroke_width.max(1),
            eraser_width: self.drawing.eraser_width.max(1),
            smoothing: self.drawing.smoothing,
        }
    }

    /// Font used for committed text.
    pub fn font(&self) -> FontDescriptor {
        FontDescriptor::new(
            self.drawing.font_family.clone(),
            self.drawing.font_weight.clone(),
            self.drawing.font_style.clone(),
            self.drawing.font_size,
        )
    }

    /// Download target, resolving `~` and the platform download directory.
    pub fn download_config(&self) -> DownloadConfig {
        DownloadConfig {
            directory: self
                .export
                .download_dir
                .as_deref()
                .map(expand_tilde)
                .unwrap_or_else(default_download_dir),
            filename: self.export.filename.clone(),
        }
    }

    pub fn submit_config(&self) -> SubmitConfig {
        SubmitConfig {
            endpoint: self.submit.endpoint.clone(),
            user_query: self.submit.user_query.clone(),
            context: self.submit.context.clone(),
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/slateboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("slateboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file
    /// does not exist. All loaded values are validated and clamped.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;
        Self::create_default_file_at(&config_path)?;
        Ok(config_path)
    }

    pub fn create_default_file_at(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(config_path, EXAMPLE_CONFIG)?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON Schema describing the configuration file.
    pub fn json_schema() -> Result<String> {
        let schema = schemars::schema_for!(Config);
        serde_json::to_string_pretty(&schema).context("Failed to serialize config schema")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Color;
    use crate::export::submit::DEFAULT_ENDPOINT;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.canvas.width, 1200);
        assert_eq!(config.canvas.height, 700);
        assert_eq!(config.palette(), Palette::default());
        assert_eq!(config.style(), StyleParams::default());
    }

    #[test]
    fn example_config_parses_to_defaults() {
        let config = Config::from_toml_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config.canvas, CanvasConfig::default());
        assert_eq!(config.drawing, DrawingConfig::default());
        assert_eq!(config.submit, SubmitSettings::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml_str(
            r#"
            [canvas]
            width = 0
            height = 100000

            [drawing]
            stroke_width = 500
            eraser_width = 0
            font_size = 2.0
            font_weight = "chunky"
            "#,
        )
        .unwrap();
        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, 8192);
        assert_eq!(config.drawing.stroke_width, 100);
        assert_eq!(config.drawing.eraser_width, 1);
        assert_eq!(config.drawing.font_size, 8.0);
        assert_eq!(config.drawing.font_weight, "bold");
    }

    #[test]
    fn invalid_filename_and_endpoint_are_reset() {
        let config = Config::from_toml_str(
            r#"
            [export]
            filename = "../escape.jpg"

            [submit]
            endpoint = "not a url"
            "#,
        )
        .unwrap();
        assert_eq!(config.export.filename, "my-image-name.png");
        assert_eq!(
            config.submit.endpoint,
            "https://test-maths.free.beeceptor.com/image"
        );
    }

    #[test]
    fn endpoints_must_be_http_or_https() {
        assert!(is_valid_endpoint("https://example.com/image"));
        assert!(is_valid_endpoint("http://127.0.0.1:8080/submit"));
        assert!(!is_valid_endpoint("mailto:teacher@example.com"));
        assert!(!is_valid_endpoint("ftp://example.com/image"));
        assert!(!is_valid_endpoint("example.com/image"));

        let config = Config::from_toml_str(
            r#"
            [submit]
            endpoint = "mailto:teacher@example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.submit.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn colors_accept_names_hex_and_rgb() {
        let config = Config::from_toml_str(
            r##"
            [canvas]
            background = [255, 255, 255]
            foreground = "#ff0000"
            "##,
        )
        .unwrap();
        let palette = config.palette();
        assert_eq!(palette.background, Color::from_rgb8(255, 255, 255));
        assert_eq!(palette.foreground, Color::from_rgb8(255, 0, 0));
    }

    #[test]
    fn download_dir_overrides_platform_default() {
        let config = Config::from_toml_str(
            r#"
            [export]
            download_dir = "/tmp/slateboard-downloads"
            filename = "board.png"
            "#,
        )
        .unwrap();
        let download = config.download_config();
        assert_eq!(download.directory, PathBuf::from("/tmp/slateboard-downloads"));
        assert_eq!(download.filename, "board.png");
    }

    #[test]
    fn create_default_file_refuses_to_overwrite() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        Config::create_default_file_at(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), EXAMPLE_CONFIG);
        assert!(Config::create_default_file_at(&path).is_err());
    }

    #[test]
    fn schema_lists_sections() {
        let schema = Config::json_schema().unwrap();
        for section in ["canvas", "drawing", "export", "submit"] {
            assert!(schema.contains(section), "schema missing {section}");
        }
    }
}
