//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV, DATA_DIR_ENV};
use crate::models::{HslColor, DEFAULT_HISTORY_CAPACITY};

/// Which widgets the popup surface shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PopupLayout {
    /// Color readouts, lists, and the embedded HSL/RGB/HEX editor
    #[default]
    Full,
    /// Color readouts and lists only
    HistoryOnly,
}

impl PopupLayout {
    /// Whether the editor widgets (inputs, hue slider, surface) are present.
    #[must_use]
    pub const fn has_editor(self) -> bool {
        matches!(self, Self::Full)
    }
}

/// Persistence location configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Directory holding the color store (defaults to the platform data directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolves the directory the store lives in.
    ///
    /// Precedence: `COLORPICK_DATA_DIR`, then `storage.data_dir`, then
    /// the platform data directory.
    ///
    /// - Linux: `~/.local/share/ColorPick/`
    /// - macOS: `~/Library/Application Support/ColorPick/`
    /// - Windows: `%APPDATA%\ColorPick\`
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        Ok(dirs::data_dir()
            .context("Failed to determine data directory")?
            .join(APP_DIR_NAME))
    }
}

/// History list configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of recently picked colors to keep
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

const fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Popup layout (full editor or history only)
    #[serde(default)]
    pub layout: PopupLayout,
    /// Hue shown before anything has been picked
    #[serde(default = "default_hue")]
    pub default_hue: f64,
    /// Saturation shown before anything has been picked
    #[serde(default = "default_saturation")]
    pub default_saturation: f64,
    /// Lightness shown before anything has been picked
    #[serde(default = "default_lightness")]
    pub default_lightness: f64,
    /// Width of the saturation/lightness surface in pixels
    #[serde(default = "default_surface_width")]
    pub surface_width: f64,
    /// Height of the saturation/lightness surface in pixels
    #[serde(default = "default_surface_height")]
    pub surface_height: f64,
}

fn default_hue() -> f64 {
    210.0
}

fn default_saturation() -> f64 {
    70.0
}

fn default_lightness() -> f64 {
    50.0
}

fn default_surface_width() -> f64 {
    200.0
}

fn default_surface_height() -> f64 {
    120.0
}

impl UiConfig {
    /// The configured starting color.
    #[must_use]
    pub const fn default_color(&self) -> HslColor {
        HslColor::new(
            self.default_hue,
            self.default_saturation,
            self.default_lightness,
        )
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            layout: PopupLayout::default(),
            default_hue: default_hue(),
            default_saturation: default_saturation(),
            default_lightness: default_lightness(),
            surface_width: default_surface_width(),
            surface_height: default_surface_height(),
        }
    }
}

/// Sampler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// When false, picking always reports that sampling is unavailable
    #[serde(default = "default_sampler_enabled")]
    pub enabled: bool,
}

const fn default_sampler_enabled() -> bool {
    true
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            enabled: default_sampler_enabled(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ColorPick/config.toml`
/// - macOS: `~/Library/Application Support/ColorPick/config.toml`
/// - Windows: `%APPDATA%\ColorPick\config.toml`
///
/// The directory can be overridden with `COLORPICK_CONFIG_DIR`.
///
/// # Validation
///
/// - `history.capacity` must be at least 1
/// - default color components must be finite, saturation and lightness in 0-100
/// - surface dimensions must be positive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Persistence settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// History list settings
    #[serde(default)]
    pub history: HistoryConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Sampler settings
    #[serde(default)]
    pub sampler: SamplerConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/ColorPick/`
    /// - macOS: `~/Library/Application Support/ColorPick/`
    /// - Windows: `%APPDATA%\ColorPick\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            tracing::debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config = Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.history.capacity == 0 {
            anyhow::bail!("history.capacity must be at least 1");
        }

        let ui = &self.ui;
        if !ui.default_hue.is_finite() {
            anyhow::bail!("ui.default_hue must be a finite number");
        }
        for (name, value) in [
            ("ui.default_saturation", ui.default_saturation),
            ("ui.default_lightness", ui.default_lightness),
        ] {
            if !(0.0..=100.0).contains(&value) {
                anyhow::bail!("{name} must be between 0 and 100, got {value}");
            }
        }
        for (name, value) in [
            ("ui.surface_width", ui.surface_width),
            ("ui.surface_height", ui.surface_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                anyhow::bail!("{name} must be a positive number, got {value}");
            }
        }

        Ok(())
    }
}
