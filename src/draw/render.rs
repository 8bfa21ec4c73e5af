//! Cairo-based rendering of the picker canvas.

use super::color::{BLACK, Color, LIGHT_GRAY, RED, WHITE};
use super::points::Point;
use crate::config::{GridConfig, RenderConfig};
use crate::input::PickerState;
use std::f64::consts::PI;
use thiserror::Error;

/// Grid line width in pixels
const GRID_LINE_WIDTH: f64 = 0.5;
/// Axis line width in pixels
const AXIS_LINE_WIDTH: f64 = 2.0;

/// Errors that can occur while producing a canvas preview.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to write preview: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolved colors and sizes for drawing the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub background: Color,
    pub grid: Color,
    pub axis: Color,
    pub marker: Color,
    pub marker_radius: f64,
    /// Draw the tool/point-count bar along the bottom edge
    pub status_bar: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: WHITE,
            grid: LIGHT_GRAY,
            axis: BLACK,
            marker: RED,
            marker_radius: 5.0,
            status_bar: false,
        }
    }
}

impl RenderStyle {
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            background: config.background_color.to_color_or(WHITE),
            grid: config.grid_color.to_color_or(LIGHT_GRAY),
            axis: config.axis_color.to_color_or(BLACK),
            marker: config.marker_color.to_color_or(RED),
            marker_radius: config.marker_radius,
            status_bar: config.status_bar,
        }
    }
}

/// Fills the canvas with the background color.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    color.apply(ctx);
    let _ = ctx.paint(); // Ignore errors - an unpainted canvas is still usable
}

/// Draws grid lines every `grid.size` pixels when the grid is enabled.
///
/// Lines start at the canvas origin (top-left), not the center.
pub fn render_grid(ctx: &cairo::Context, grid: &GridConfig, width: f64, height: f64, color: Color) {
    if !grid.enabled || grid.size == 0 {
        return;
    }

    let step = grid.size as f64;
    color.apply(ctx);
    ctx.set_line_width(GRID_LINE_WIDTH);

    let mut x = 0.0;
    while x <= width {
        ctx.move_to(x, 0.0);
        ctx.line_to(x, height);
        x += step;
    }

    let mut y = 0.0;
    while y <= height {
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
        y += step;
    }

    let _ = ctx.stroke();
}

/// Draws the world X and Y axes through the canvas center.
pub fn render_axes(ctx: &cairo::Context, width: f64, height: f64, color: Color) {
    color.apply(ctx);
    ctx.set_line_width(AXIS_LINE_WIDTH);

    ctx.move_to(width / 2.0, 0.0);
    ctx.line_to(width / 2.0, height);
    ctx.move_to(0.0, height / 2.0);
    ctx.line_to(width, height / 2.0);
    let _ = ctx.stroke();
}

/// Draws a filled circular marker for one point.
pub fn render_marker(ctx: &cairo::Context, point: Point, radius: f64, color: Color) {
    color.apply(ctx);
    ctx.new_sub_path();
    ctx.arc(point.x, point.y, radius, 0.0, PI * 2.0);
    let _ = ctx.fill();
}

/// Renders markers for every point in order.
pub fn render_points(ctx: &cairo::Context, points: &[Point], radius: f64, color: Color) {
    for point in points {
        render_marker(ctx, *point, radius, color);
    }
}

/// Renders the whole canvas: background, grid, axes, points, and any pending
/// line endpoint.
pub fn render_canvas(ctx: &cairo::Context, state: &PickerState, style: &RenderStyle) {
    let (width, height) = state.canvas_dims();

    render_background(ctx, style.background);
    render_grid(ctx, &state.settings().grid, width, height, style.grid);
    render_axes(ctx, width, height, style.axis);
    render_points(ctx, state.points.points(), style.marker_radius, style.marker);

    if let Some(start) = state.pending_line_start() {
        render_marker(ctx, start, style.marker_radius, style.marker);
    }

    if style.status_bar {
        crate::ui::render_status_bar(ctx, state, height);
    }
}

/// Renders the canvas into a new ARGB32 image surface sized to the canvas.
pub fn render_to_surface(
    state: &PickerState,
    style: &RenderStyle,
) -> Result<cairo::ImageSurface, RenderError> {
    let size = state.canvas_size().min(i32::MAX as u32) as i32;
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, size, size)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        render_canvas(&ctx, state, style);
    }
    surface.flush();
    Ok(surface)
}

/// Renders the canvas and encodes it as PNG bytes.
pub fn render_png(state: &PickerState, style: &RenderStyle) -> Result<Vec<u8>, RenderError> {
    let surface = render_to_surface(state, style)?;
    let mut bytes = Vec::new();
    surface.write_to_png(&mut bytes)?;
    log::debug!("Encoded canvas preview ({} bytes)", bytes.len());
    Ok(bytes)
}
