//! Configuration file support for cframe-picker.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/cframe-picker/config.toml`. Settings include the canvas size,
//! grid and snapping, output format, world offsets, and preview colors.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, OutputFormat, OutputType};
pub use types::{CanvasConfig, GridConfig, OffsetConfig, OutputConfig, RenderConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Smallest and largest accepted canvas edge in pixels.
pub const CANVAS_SIZE_RANGE: (u32, u32) = (100, 4000);

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// size = 500
///
/// [grid]
/// enabled = true
/// size = 25
/// snap = false
///
/// [output]
/// format = "multiline"
/// type = "cframe"
///
/// [offset]
/// x = 0.0
/// y = 5.0
/// z = 0.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas dimensions
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Grid drawing and snapping
    #[serde(default)]
    pub grid: GridConfig,

    /// Literal list output
    #[serde(default)]
    pub output: OutputConfig,

    /// World-space offsets applied on export and import
    #[serde(default)]
    pub offset: OffsetConfig,

    /// Canvas preview rendering
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.size`: 100 - 4000
    /// - `grid.size`: 1 - 500
    /// - `render.marker_radius`: 1.0 - 50.0
    /// - offsets: must be finite (reset to 0.0 otherwise)
    pub fn validate_and_clamp(&mut self) {
        let (min_size, max_size) = CANVAS_SIZE_RANGE;
        if !(min_size..=max_size).contains(&self.canvas.size) {
            log::warn!(
                "Invalid canvas size {}, clamping to {}-{} range",
                self.canvas.size,
                min_size,
                max_size
            );
            self.canvas.size = self.canvas.size.clamp(min_size, max_size);
        }

        if !(1..=500).contains(&self.grid.size) {
            log::warn!(
                "Invalid grid size {}, clamping to 1-500 range",
                self.grid.size
            );
            self.grid.size = self.grid.size.clamp(1, 500);
        }

        if !(1.0..=50.0).contains(&self.render.marker_radius) {
            log::warn!(
                "Invalid marker_radius {:.1}, clamping to 1.0-50.0 range",
                self.render.marker_radius
            );
            self.render.marker_radius = if self.render.marker_radius.is_nan() {
                5.0
            } else {
                self.render.marker_radius.clamp(1.0, 50.0)
            };
        }

        for (axis, value) in [
            ("x", &mut self.offset.x),
            ("y", &mut self.offset.y),
            ("z", &mut self.offset.z),
        ] {
            if !value.is_finite() {
                log::warn!("Invalid offset.{} {}, falling back to 0.0", axis, value);
                *value = 0.0;
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/cframe-picker/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("cframe-picker");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Loads configuration from `path` (or the default location when `None`).
    ///
    /// A missing file yields the defaults. All loaded values are validated and
    /// clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::get_config_path()?,
        };

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        config.validate_and_clamp();
        Ok(config)
    }

    /// Parses a TOML document without validation.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Saves the configuration to `path`, creating the parent directory if needed.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Writes the documented example config to `path` (or the default location).
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file(path: Option<&Path>) -> Result<PathBuf> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::get_config_path()?,
        };

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the config file, for editor tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.canvas.size, 500);
        assert_eq!(config.grid, GridConfig::default());
        assert_eq!(config.output.format, OutputFormat::Multiline);
        assert_eq!(config.output.output_type, OutputType::CFrame);
        assert!(config.output.auto_update);
        assert_eq!(config.render.marker_radius, 5.0);
    }

    #[test]
    fn parses_sections() {
        let config = Config::from_toml(
            r#"
            [canvas]
            size = 800

            [grid]
            snap = true
            size = 40

            [output]
            format = "single-line"
            type = "vector3"

            [offset]
            y = 5.5
            "#,
        )
        .unwrap();

        assert_eq!(config.canvas.size, 800);
        assert!(config.grid.snap);
        assert!(config.grid.enabled);
        assert_eq!(config.grid.size, 40);
        assert_eq!(config.output.format, OutputFormat::SingleLine);
        assert_eq!(config.output.output_type, OutputType::Vector3);
        assert_eq!(config.offset.y, 5.5);
        assert_eq!(config.offset.x, 0.0);
    }

    #[test]
    fn clamps_out_of_range_values() {
        let mut config = Config::default();
        config.canvas.size = 10;
        config.grid.size = 0;
        config.render.marker_radius = 400.0;
        config.offset.z = f64::NAN;
        config.validate_and_clamp();

        assert_eq!(config.canvas.size, 100);
        assert_eq!(config.grid.size, 1);
        assert_eq!(config.render.marker_radius, 50.0);
        assert_eq!(config.offset.z, 0.0);
    }

    #[test]
    fn save_and_reload_round_trip() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.canvas.size = 640;
        config.output.output_type = OutputType::Vector;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.canvas.size, 640);
        assert_eq!(loaded.output.output_type, OutputType::Vector);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config::load_from(Some(&temp.path().join("absent.toml"))).unwrap();
        assert_eq!(config.canvas.size, 500);
    }

    #[test]
    fn example_file_parses_and_refuses_overwrite() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        Config::create_default_file(Some(&path)).unwrap();

        let loaded = Config::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.canvas.size, 500);
        assert!(Config::create_default_file(Some(&path)).is_err());
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("canvas"));
        assert!(schema.contains("offset"));
    }
}
