//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whitespace layout of the exported literal list.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One literal per indented line inside braces
    #[default]
    Multiline,
    /// All literals on one line: `{a, b, c}`
    SingleLine,
}

/// Constructor used to wrap each exported coordinate triple.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    /// `CFrame.new(x, y, z)`
    #[default]
    CFrame,
    /// `Vector3.new(x, y, z)`
    Vector3,
    /// `vector.create(x, y, z)`
    Vector,
}

impl OutputType {
    /// Constructor expression placed before the argument list.
    pub fn constructor(&self) -> &'static str {
        match self {
            OutputType::CFrame => "CFrame.new",
            OutputType::Vector3 => "Vector3.new",
            OutputType::Vector => "vector.create",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "multi" | "multiline" | "multi-line" => Ok(OutputFormat::Multiline),
            "single" | "singleline" | "single-line" => Ok(OutputFormat::SingleLine),
            other => Err(format!(
                "unknown output format '{}' (expected single or multi)",
                other
            )),
        }
    }
}

impl FromStr for OutputType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cframe" => Ok(OutputType::CFrame),
            "vector3" => Ok(OutputType::Vector3),
            "vector" => Ok(OutputType::Vector),
            other => Err(format!(
                "unknown output type '{}' (expected cframe, vector3 or vector)",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Multiline => f.write_str("multi"),
            OutputFormat::SingleLine => f.write_str("single"),
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputType::CFrame => f.write_str("cframe"),
            OutputType::Vector3 => f.write_str("vector3"),
            OutputType::Vector => f.write_str("vector"),
        }
    }
}

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// marker_color = "red"
///
/// # Custom RGB color (0-255 per component)
/// grid_color = [221, 221, 221]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, black, white, gray, lightgray
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown color names fall back to `fallback` with a warning.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using fallback", name);
                fallback
            }),
            ColorSpec::Rgb(rgb) => Color::from_rgb8(*rgb),
        }
    }

    /// Converts using red as the fallback for unknown names.
    pub fn to_color(&self) -> Color {
        self.to_color_or(RED)
    }
}
