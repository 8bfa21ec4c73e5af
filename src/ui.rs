//! UI glue: output panel, settings panel mirroring, and the preview status bar.

use crate::codec::EMPTY_OUTPUT;
use crate::config::{Config, GridConfig, OutputFormat, OutputType};
use crate::input::{PickerState, SettingChange};
use std::time::{Duration, Instant};

/// How long the copy control shows "Copied!" after a copy.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(1500);

// ============================================================================
// Output Panel
// ============================================================================

/// The output text field and its companion copy control.
#[derive(Debug, Clone, Default)]
pub struct OutputPanel {
    text: String,
    copy_visible: bool,
    copied_at: Option<Instant>,
}

impl OutputPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows freshly generated output. The copy control is only offered for real lists.
    pub fn show(&mut self, text: String) {
        self.copy_visible = text != EMPTY_OUTPUT;
        self.text = text;
    }

    /// Empties the field and hides the copy control.
    pub fn clear(&mut self) {
        self.text.clear();
        self.copy_visible = false;
        self.copied_at = None;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn copy_visible(&self) -> bool {
        self.copy_visible
    }

    /// Text to place on the clipboard, or `None` while the copy control is hidden.
    pub fn copyable_text(&self) -> Option<String> {
        self.copy_visible.then(|| self.text.clone())
    }

    /// Starts the "Copied!" feedback once the clipboard accepted the text.
    pub fn mark_copied(&mut self, now: Instant) {
        if self.copy_visible {
            self.copied_at = Some(now);
        }
    }

    /// Label of the copy control at `now`.
    pub fn copy_label(&self, now: Instant) -> &'static str {
        match self.copied_at {
            Some(at) if now.saturating_duration_since(at) < COPY_FEEDBACK => "Copied!",
            _ => "Copy",
        }
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Toggles shared by the main controls and the settings panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub grid: GridConfig,
    pub format: OutputFormat,
    pub output_type: OutputType,
    pub auto_update: bool,
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            grid: config.grid.clone(),
            format: config.output.format,
            output_type: config.output.output_type,
            auto_update: config.output.auto_update,
        }
    }

    pub fn apply(&mut self, change: SettingChange) {
        match change {
            SettingChange::Grid(enabled) => self.grid.enabled = enabled,
            SettingChange::GridSize(size) => self.grid.size = size.max(1),
            SettingChange::Snap(snap) => self.grid.snap = snap,
            SettingChange::Format(format) => self.format = format,
            SettingChange::Type(output_type) => self.output_type = output_type,
            SettingChange::AutoUpdate(auto_update) => self.auto_update = auto_update,
        }
    }
}

/// The settings panel holds its own copy of the toggles.
///
/// Opening the panel refreshes the copy from the main controls; edits made in
/// the panel are written back by [`PickerState`].
#[derive(Debug, Clone)]
pub struct SettingsModal {
    open: bool,
    mirror: Settings,
}

impl SettingsModal {
    pub fn new(settings: &Settings) -> Self {
        Self {
            open: false,
            mirror: settings.clone(),
        }
    }

    pub fn open(&mut self, primary: &Settings) {
        self.mirror = primary.clone();
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mirror(&self) -> &Settings {
        &self.mirror
    }

    pub(crate) fn apply(&mut self, change: SettingChange) {
        self.mirror.apply(change);
    }
}

/// Human-readable dump of the settings, shown when the panel opens.
pub fn describe_settings(settings: &Settings) -> String {
    let on_off = |v: bool| if v { "on" } else { "off" };
    format!(
        "grid: {}\ngrid-size: {}\nsnap: {}\nformat: {}\ntype: {}\nauto-update: {}",
        on_off(settings.grid.enabled),
        settings.grid.size,
        on_off(settings.grid.snap),
        settings.format,
        settings.output_type,
        on_off(settings.auto_update)
    )
}

// ============================================================================
// Status Bar
// ============================================================================

/// Font size of the preview status bar
const STATUS_FONT_SIZE: f64 = 13.0;
/// Padding around the status bar text
const STATUS_PADDING: f64 = 6.0;

/// One-line summary of the active tool and point count.
pub fn status_line(state: &PickerState) -> String {
    let tool = match state.pending_line_start() {
        Some(_) => "line (awaiting end)".to_string(),
        None => state.active_tool().to_string(),
    };
    format!(
        "Tool: {} | Points: {} | Canvas: {}px",
        tool,
        state.points.len(),
        state.canvas_size()
    )
}

/// Render the status bar along the bottom-left edge of the preview.
pub fn render_status_bar(ctx: &cairo::Context, state: &PickerState, canvas_height: f64) {
    let text = status_line(state);

    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    ctx.set_font_size(STATUS_FONT_SIZE);

    let Ok(extents) = ctx.text_extents(&text) else {
        log::warn!("Failed to measure status bar text");
        return;
    };

    let box_height = STATUS_FONT_SIZE + STATUS_PADDING * 2.0;
    let box_width = extents.width() + STATUS_PADDING * 2.0;
    let top = canvas_height - box_height;

    ctx.set_source_rgba(0.0, 0.0, 0.0, 0.7);
    ctx.rectangle(0.0, top, box_width, box_height);
    let _ = ctx.fill();

    ctx.set_source_rgba(1.0, 1.0, 1.0, 1.0);
    ctx.move_to(STATUS_PADDING, top + STATUS_PADDING + STATUS_FONT_SIZE * 0.8);
    let _ = ctx.show_text(&text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_control_hidden_for_placeholder() {
        let mut panel = OutputPanel::new();
        panel.show(EMPTY_OUTPUT.to_string());
        assert!(!panel.copy_visible());
        assert_eq!(panel.copyable_text(), None);
        panel.mark_copied(Instant::now());
        assert_eq!(panel.copy_label(Instant::now()), "Copy");
    }

    #[test]
    fn copy_feedback_reverts_after_timeout() {
        let mut panel = OutputPanel::new();
        panel.show("{CFrame.new(0.00, 0.00, 0.00)}".to_string());

        let start = Instant::now();
        assert_eq!(panel.copy_label(start), "Copy");
        assert_eq!(
            panel.copyable_text().as_deref(),
            Some("{CFrame.new(0.00, 0.00, 0.00)}")
        );
        // Feedback only starts once the clipboard write succeeded
        assert_eq!(panel.copy_label(start), "Copy");
        panel.mark_copied(start);
        assert_eq!(panel.copy_label(start + Duration::from_millis(1499)), "Copied!");
        assert_eq!(panel.copy_label(start + COPY_FEEDBACK), "Copy");
    }

    #[test]
    fn clear_hides_copy_and_empties_text() {
        let mut panel = OutputPanel::new();
        panel.show("{}".to_string());
        panel.clear();
        assert_eq!(panel.text(), "");
        assert!(!panel.copy_visible());
    }

    #[test]
    fn modal_open_refreshes_mirror() {
        let mut primary = Settings::from_config(&Config::default());
        let mut modal = SettingsModal::new(&primary);

        primary.apply(SettingChange::Snap(true));
        assert!(!modal.mirror().grid.snap);

        modal.open(&primary);
        assert!(modal.is_open());
        assert!(modal.mirror().grid.snap);
    }

    #[test]
    fn grid_size_never_zero() {
        let mut settings = Settings::from_config(&Config::default());
        settings.apply(SettingChange::GridSize(0));
        assert_eq!(settings.grid.size, 1);
    }
}
