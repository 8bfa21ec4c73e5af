//! Picker tool selection.

use std::fmt;
use std::str::FromStr;

/// Picker tool selection.
///
/// The active tool determines what a click on the canvas does.
/// Exactly one tool is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Place a single point (default)
    #[default]
    Point,
    /// Two clicks: fill the segment between them with points
    Line,
    /// Remove the most recent point near the click
    Erase,
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Point => "point",
            Tool::Line => "line",
            Tool::Erase => "erase",
        }
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "point" => Ok(Tool::Point),
            "line" => Ok(Tool::Line),
            "erase" | "eraser" => Ok(Tool::Erase),
            other => Err(format!(
                "unknown tool '{}' (expected point, line or erase)",
                other
            )),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
