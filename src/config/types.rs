//! Configuration type definitions.

use super::enums::{ColorSpec, OutputFormat, OutputType};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Canvas settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas edge length in pixels; the canvas is always square (valid range: 100 - 4000)
    #[serde(default = "default_canvas_size")]
    pub size: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            size: default_canvas_size(),
        }
    }
}

/// Grid display and snapping settings.
///
/// The grid is an input aid only: it never moves points that are already placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GridConfig {
    /// Draw grid lines behind the points
    #[serde(default = "default_grid_enabled")]
    pub enabled: bool,

    /// Grid spacing in pixels (valid range: 1 - 500)
    #[serde(default = "default_grid_size")]
    pub size: u32,

    /// Snap clicks to the nearest grid intersection before inserting
    #[serde(default)]
    pub snap: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            enabled: default_grid_enabled(),
            size: default_grid_size(),
            snap: false,
        }
    }
}

/// Literal list output settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Layout of the generated list: "multiline" or "single-line"
    #[serde(default)]
    pub format: OutputFormat,

    /// Constructor for each entry: "cframe", "vector3" or "vector"
    #[serde(default, rename = "type")]
    pub output_type: OutputType,

    /// Regenerate the output when format/type change from the settings panel
    #[serde(default = "default_auto_update")]
    pub auto_update: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            output_type: OutputType::default(),
            auto_update: default_auto_update(),
        }
    }
}

/// World-space translation added to every exported coordinate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct OffsetConfig {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

/// Canvas preview rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RenderConfig {
    /// Radius of point markers in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,

    /// Point marker color
    #[serde(default = "default_marker_color")]
    pub marker_color: ColorSpec,

    /// Grid line color
    #[serde(default = "default_grid_color")]
    pub grid_color: ColorSpec,

    /// Axis line color
    #[serde(default = "default_axis_color")]
    pub axis_color: ColorSpec,

    /// Canvas fill color
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,

    /// Draw a tool/point-count bar along the bottom edge of the preview
    #[serde(default)]
    pub status_bar: bool,

    /// Directory for renders written without an explicit path
    /// (defaults to the current directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            marker_radius: default_marker_radius(),
            marker_color: default_marker_color(),
            grid_color: default_grid_color(),
            axis_color: default_axis_color(),
            background_color: default_background_color(),
            status_bar: false,
            output_dir: None,
        }
    }
}

fn default_canvas_size() -> u32 {
    500
}

fn default_grid_enabled() -> bool {
    true
}

fn default_grid_size() -> u32 {
    25
}

fn default_auto_update() -> bool {
    true
}

fn default_marker_radius() -> f64 {
    5.0
}

fn default_marker_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_grid_color() -> ColorSpec {
    ColorSpec::Rgb([221, 221, 221])
}

fn default_axis_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_background_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}
