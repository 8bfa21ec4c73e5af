//! Mapping between canvas pixel space and world space.
//!
//! Canvas space has its origin at the top-left corner with Y growing downward.
//! World space has its origin at the canvas center with Y growing upward, and
//! one world unit spans [`SCALE`] pixels.

use crate::draw::Point;

/// Pixels per world unit.
pub const SCALE: f64 = 50.0;

/// A position in world space (before any user offset is applied).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldXY {
    pub x: f64,
    pub y: f64,
}

impl WorldXY {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Converts a canvas point into world coordinates.
///
/// # Arguments
/// * `p` - Point in canvas pixels
/// * `canvas_width` - Canvas width in pixels
/// * `canvas_height` - Canvas height in pixels
pub fn to_world(p: Point, canvas_width: f64, canvas_height: f64) -> WorldXY {
    WorldXY {
        x: (p.x - canvas_width / 2.0) / SCALE,
        y: -(p.y - canvas_height / 2.0) / SCALE,
    }
}

/// Converts world coordinates back into a canvas point. Exact inverse of [`to_world`].
pub fn to_canvas(w: WorldXY, canvas_width: f64, canvas_height: f64) -> Point {
    Point {
        x: w.x * SCALE + canvas_width / 2.0,
        y: canvas_height / 2.0 - w.y * SCALE,
    }
}
