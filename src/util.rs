//! Utility functions for grid snapping and numeric text handling.
//!
//! This module provides:
//! - Grid snapping for click positions
//! - Lenient number parsing for offset fields and imported literals
//! - Fixed two-decimal coordinate formatting

use crate::draw::Point;

// ============================================================================
// Grid Snapping
// ============================================================================

/// Rounds a canvas point to the nearest multiple of `grid_size` on both axes.
///
/// Halves round toward positive infinity, so `12.5` snaps up on a 25px grid.
/// A zero grid size leaves the point unchanged.
pub fn snap_to_grid(p: Point, grid_size: u32) -> Point {
    if grid_size == 0 {
        return p;
    }
    let size = grid_size as f64;
    Point {
        x: round_half_up(p.x / size) * size,
        y: round_half_up(p.y / size) * size,
    }
}

fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

// ============================================================================
// Number Parsing
// ============================================================================

/// Parses the longest leading decimal number in `text`.
///
/// Leading whitespace is skipped and trailing garbage is ignored, so
/// `"1.5.2"` reads as `1.5` and `"3px"` as `3.0`. Text without a numeric
/// prefix yields NaN rather than an error; callers let NaN flow into the
/// output.
pub fn parse_number(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'-' || bytes[end] == b'+') {
        end += 1;
    }

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }

    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
            digits += 1;
        }
        if digits > 0 {
            end = frac;
        }
    }

    if digits == 0 {
        if s[end..].starts_with("Infinity") {
            return if s.starts_with('-') {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
        }
        return f64::NAN;
    }

    // Optional exponent, only taken when it has digits
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && (bytes[exp] == b'-' || bytes[exp] == b'+') {
            exp += 1;
        }
        let start = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > start {
            end = exp;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

// ============================================================================
// Formatting
// ============================================================================

/// Formats a coordinate with exactly two decimals.
///
/// Negative zero prints as `0.00`; NaN and infinities print as `NaN`,
/// `Infinity` and `-Infinity`.
pub fn format_coord(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}Infinity");
    }
    if value == 0.0 {
        return "0.00".to_string();
    }
    format!("{:.2}", value)
}

/// Parses an on/off style toggle value.
pub fn parse_toggle(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
