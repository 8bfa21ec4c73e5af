//! Saving canvas previews to disk.

use super::render::{RenderError, RenderStyle, render_png};
use crate::input::PickerState;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Filename template for previews saved without an explicit path.
pub const DEFAULT_FILENAME_TEMPLATE: &str = "points_%Y-%m-%d_%H%M%S";

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Picks the destination for a preview: `explicit` if given, otherwise a
/// timestamped file in `directory` (or the current directory).
pub fn resolve_output_path(explicit: Option<&Path>, directory: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => expand_tilde(path),
        None => {
            let dir = directory.map(expand_tilde).unwrap_or_else(|| PathBuf::from("."));
            dir.join(generate_filename(DEFAULT_FILENAME_TEMPLATE, "png"))
        }
    }
}

/// Renders the canvas and writes it to `path` as PNG, creating parent directories.
pub fn save_preview(
    state: &PickerState,
    style: &RenderStyle,
    path: &Path,
) -> Result<PathBuf, RenderError> {
    let bytes = render_png(state, style)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            log::info!("Creating preview directory: {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, &bytes)?;
    log::info!(
        "Saved canvas preview to {} ({} bytes)",
        path.display(),
        bytes.len()
    );
    Ok(path.to_path_buf())
}

/// Expand a leading `~/` to the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn generated_filename_uses_template_and_extension() {
        let filename = generate_filename("points_%Y", "png");
        assert!(filename.starts_with("points_"));
        assert!(filename.ends_with(".png"));
        assert_eq!(filename.len(), "points_2026.png".len());
    }

    #[test]
    fn explicit_path_wins() {
        let path = resolve_output_path(Some(Path::new("/tmp/out.png")), Some(Path::new("/x")));
        assert_eq!(path, PathBuf::from("/tmp/out.png"));
    }

    #[test]
    fn default_path_lands_in_directory() {
        let path = resolve_output_path(None, Some(Path::new("/srv/previews")));
        assert!(path.starts_with("/srv/previews"));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));
    }

    #[test]
    fn save_preview_writes_png() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nested").join("canvas.png");
        let mut state = PickerState::from_config(&Config::default());
        state.generate_shape("triangle");

        let written = save_preview(&state, &RenderStyle::default(), &path).unwrap();
        let bytes = fs::read(written).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }
}
