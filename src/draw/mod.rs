//! Canvas model and Cairo-based rendering.
//!
//! This module defines the core canvas types:
//! - [`Point`] / [`PointStore`]: picked points in canvas pixel space
//! - [`Shape`]: preset outlines that seed the canvas
//! - [`Color`]: RGBA color representation with predefined color constants
//! - Rendering and PNG saving for the canvas preview

pub mod color;
pub mod file;
pub mod points;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use color::Color;
pub use file::{resolve_output_path, save_preview};
pub use points::{DUPLICATE_THRESHOLD, Point, PointStore};
pub use render::{RenderError, RenderStyle, render_canvas, render_png, render_to_surface};
pub use shape::Shape;
