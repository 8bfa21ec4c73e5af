//! Library exports for the cframe-picker point picker.
//!
//! The binary is a thin shell around [`console::Console`]; everything it
//! drives (session state, codecs, rendering, configuration) lives here so that
//! other tools can reuse the conversion and validation logic.

pub mod clipboard;
pub mod codec;
pub mod config;
pub mod console;
pub mod draw;
pub mod input;
pub mod transform;
pub mod ui;
pub mod util;

pub use config::Config;
