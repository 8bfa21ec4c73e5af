//! Clipboard integration for copying the generated literal list.

use std::process::{Command, Stdio};
use thiserror::Error;
use wl_clipboard_rs::copy::{MimeType, Options, Source};

/// Errors that can occur while copying to the clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("WAYLAND_DISPLAY not set - clipboard requires a Wayland session")]
    NoDisplay,

    #[error("Clipboard operation failed: {0}")]
    Failed(String),
}

/// Copy text to the Wayland clipboard.
///
/// Prefers the `wl-copy` command and falls back to the wl-clipboard-rs
/// library when the command is missing or fails.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    if std::env::var_os("WAYLAND_DISPLAY").is_none() {
        return Err(ClipboardError::NoDisplay);
    }

    log::debug!("Attempting to copy {} bytes of text to clipboard", text.len());

    match copy_via_command(text) {
        Ok(()) => {
            log::info!("Copied output to clipboard via wl-copy command");
            Ok(())
        }
        Err(cmd_err) => {
            log::warn!(
                "wl-copy command path failed ({}). Falling back to wl-clipboard-rs",
                cmd_err
            );
            match copy_via_library(text) {
                Ok(()) => {
                    log::info!("Copied output to clipboard via wl-clipboard-rs fallback");
                    Ok(())
                }
                Err(lib_err) => Err(ClipboardError::Failed(format!(
                    "wl-copy failed: {} ; wl-clipboard-rs failed: {}",
                    cmd_err, lib_err
                ))),
            }
        }
    }
}

/// Copy to clipboard using wl-clipboard-rs library.
fn copy_via_library(text: &str) -> Result<(), ClipboardError> {
    // The library forks a background server so the text outlives this process
    let opts = Options::new();
    opts.copy(
        Source::Bytes(text.as_bytes().into()),
        MimeType::Text,
    )
    .map_err(|e| ClipboardError::Failed(format!("wl-clipboard-rs error: {}", e)))?;

    Ok(())
}

/// Copy to clipboard by shelling out to wl-copy command.
fn copy_via_command(text: &str) -> Result<(), ClipboardError> {
    use std::io::Write;

    let mut child = Command::new("wl-copy")
        .arg("--type")
        .arg("text/plain")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            ClipboardError::Failed(format!("Failed to spawn wl-copy (is it installed?): {}", e))
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(|e| {
            ClipboardError::Failed(format!("Failed to write to wl-copy stdin: {}", e))
        })?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| ClipboardError::Failed(format!("Failed to wait for wl-copy: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ClipboardError::Failed(format!("wl-copy failed: {}", stderr)));
    }

    log::debug!("wl-copy command completed successfully");
    Ok(())
}

/// Check if the `wl-copy` command is available.
pub fn is_clipboard_available() -> bool {
    Command::new("wl-copy")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}
