//! Data types shared by export and import.

use thiserror::Error;

/// Text shown in the output field when there is nothing to export.
pub const EMPTY_OUTPUT: &str = "No points selected!";

/// World-space translation applied to every exported coordinate.
///
/// Components may be NaN when the user typed something that is not a number;
/// that NaN is carried into the output text instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Errors that can occur while importing a literal list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The text contained no `CFrame.new(x, y, z)` literal.
    #[error("Invalid input format")]
    InvalidInput,
}
