//! Conversion between picked points and coordinate literal text.
//!
//! Export turns canvas points into a `{ CFrame.new(...), ... }` style list in
//! world space; import scans pasted text for `CFrame.new` literals and maps
//! them back onto the canvas.

mod export;
mod import;
mod types;

pub use export::{export_points, format_point};
pub use import::parse_cframe_points;
pub use types::{EMPTY_OUTPUT, ImportError, Offset};

#[cfg(test)]
mod tests;
