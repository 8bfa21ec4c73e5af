//! Literal list generation.

use super::types::{EMPTY_OUTPUT, Offset};
use crate::config::{OutputFormat, OutputType};
use crate::draw::Point;
use crate::transform;
use crate::util::format_coord;

/// Formats one canvas point as a constructor literal such as `CFrame.new(1.00, 2.00, 0.00)`.
pub fn format_point(
    point: Point,
    canvas_width: f64,
    canvas_height: f64,
    offset: Offset,
    output_type: OutputType,
) -> String {
    let world = transform::to_world(point, canvas_width, canvas_height);
    format!(
        "{}({}, {}, {})",
        output_type.constructor(),
        format_coord(world.x + offset.x),
        format_coord(world.y + offset.y),
        format_coord(offset.z)
    )
}

/// Serializes every point into a brace-delimited literal list.
///
/// Returns [`EMPTY_OUTPUT`] when `points` is empty.
pub fn export_points(
    points: &[Point],
    canvas_width: f64,
    canvas_height: f64,
    offset: Offset,
    format: OutputFormat,
    output_type: OutputType,
) -> String {
    if points.is_empty() {
        return EMPTY_OUTPUT.to_string();
    }

    let entries: Vec<String> = points
        .iter()
        .map(|p| format_point(*p, canvas_width, canvas_height, offset, output_type))
        .collect();

    log::debug!(
        "Exported {} points as {} ({})",
        entries.len(),
        output_type,
        format
    );

    match format {
        OutputFormat::SingleLine => format!("{{{}}}", entries.join(", ")),
        OutputFormat::Multiline => format!("{{\n    {}\n}}", entries.join(",\n    ")),
    }
}
