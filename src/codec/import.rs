//! Literal list parsing.
//!
//! Only `CFrame.new(x, y, z)` literals are recognized, even though export can
//! also produce `Vector3.new` and `vector.create` lists.

use super::types::{ImportError, Offset};
use crate::draw::Point;
use crate::transform::{self, WorldXY};
use crate::util::parse_number;
use regex::Regex;
use std::sync::OnceLock;

static DECLARATION_REGEX: OnceLock<Regex> = OnceLock::new();
static CFRAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn declaration_regex() -> &'static Regex {
    DECLARATION_REGEX
        .get_or_init(|| Regex::new(r"^local\s+points\s*=\s*").expect("invalid regex pattern"))
}

fn cframe_regex() -> &'static Regex {
    CFRAME_REGEX.get_or_init(|| {
        Regex::new(r"CFrame\.new\(([-0-9.]+),\s*([-0-9.]+),\s*([-0-9.]+)\)")
            .expect("invalid regex pattern")
    })
}

/// Parses every `CFrame.new(x, y, z)` literal in `input` back into canvas points.
///
/// An optional leading `local points =` declaration is ignored. The offset's X
/// and Y are subtracted before mapping to canvas space; Z is read but unused.
///
/// # Errors
/// Returns [`ImportError::InvalidInput`] when no literal is found.
pub fn parse_cframe_points(
    input: &str,
    offset: Offset,
    canvas_width: f64,
    canvas_height: f64,
) -> Result<Vec<Point>, ImportError> {
    let body = declaration_regex().replace(input, "");

    let points: Vec<Point> = cframe_regex()
        .captures_iter(&body)
        .map(|caps| {
            let x = parse_number(&caps[1]);
            let y = parse_number(&caps[2]);
            let _z = parse_number(&caps[3]);
            let world = WorldXY::new(x - offset.x, y - offset.y);
            transform::to_canvas(world, canvas_width, canvas_height)
        })
        .collect();

    if points.is_empty() {
        log::debug!("Import text contained no CFrame.new literals");
        return Err(ImportError::InvalidInput);
    }

    log::debug!("Parsed {} CFrame literals", points.len());
    Ok(points)
}
