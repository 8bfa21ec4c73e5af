//! Picker session state.

use crate::codec::{self, ImportError, Offset};
use crate::config::{CANVAS_SIZE_RANGE, Config};
use crate::draw::{Point, PointStore, shape};
use crate::input::events::{OffsetAxis, SettingChange};
use crate::input::tool::Tool;
use crate::ui::{OutputPanel, Settings, SettingsModal};
use crate::util::parse_number;

/// Tool state machine.
///
/// The pending line endpoint lives inside the `Line` variant, so it can only
/// exist while the line tool is active.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolState {
    /// Each click inserts one point
    Point,
    /// Waiting for the first (`pending == None`) or second endpoint
    Line {
        /// First endpoint, once placed
        pending: Option<Point>,
    },
    /// Each click removes the nearest point
    Erase,
}

impl ToolState {
    pub fn tool(&self) -> Tool {
        match self {
            ToolState::Point => Tool::Point,
            ToolState::Line { .. } => Tool::Line,
            ToolState::Erase => Tool::Erase,
        }
    }
}

/// Where a setting change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// The main control surface
    Primary,
    /// The settings panel copy of the control
    Modal,
}

/// All mutable state of one picker session.
///
/// Every interaction handler takes this struct; there is no other shared state.
#[derive(Debug, Clone)]
pub struct PickerState {
    /// Picked points in canvas space
    pub points: PointStore,
    /// Active tool and any pending line endpoint
    pub(crate) tool_state: ToolState,
    /// Canvas edge length in pixels
    canvas_size: u32,
    /// Main control settings (grid, snap, format, type, auto-update)
    pub(crate) settings: Settings,
    /// Settings panel and its mirrored controls
    pub(crate) modal: SettingsModal,
    /// World offsets parsed from the offset fields
    offset: Offset,
    /// Output text field and copy control
    pub output: OutputPanel,
    /// Shape currently shown in the selector (empty after clear)
    pub(crate) selected_shape: String,
    /// Whether the canvas preview is out of date
    pub needs_redraw: bool,
    /// Whether the session should end
    pub should_exit: bool,
}

impl PickerState {
    /// Creates an empty session using config defaults.
    pub fn from_config(config: &Config) -> Self {
        let settings = Settings::from_config(config);
        Self {
            points: PointStore::new(),
            tool_state: ToolState::Point,
            canvas_size: config.canvas.size,
            modal: SettingsModal::new(&settings),
            settings,
            offset: Offset::new(config.offset.x, config.offset.y, config.offset.z),
            output: OutputPanel::new(),
            selected_shape: String::new(),
            needs_redraw: true,
            should_exit: false,
        }
    }

    pub fn canvas_size(&self) -> u32 {
        self.canvas_size
    }

    /// Canvas width and height in pixels as floats.
    pub fn canvas_dims(&self) -> (f64, f64) {
        let size = self.canvas_size as f64;
        (size, size)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn modal(&self) -> &SettingsModal {
        &self.modal
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn tool_state(&self) -> &ToolState {
        &self.tool_state
    }

    pub fn selected_shape(&self) -> &str {
        &self.selected_shape
    }

    /// Returns the active tool.
    pub fn active_tool(&self) -> Tool {
        self.tool_state.tool()
    }

    /// First endpoint of a line in progress, if any.
    pub fn pending_line_start(&self) -> Option<Point> {
        match self.tool_state {
            ToolState::Line { pending } => pending,
            _ => None,
        }
    }

    /// Switches tools. Leaving the line tool drops a pending endpoint;
    /// re-selecting the line tool keeps it.
    pub fn select_tool(&mut self, tool: Tool) {
        if self.active_tool() == tool {
            return;
        }

        if self.pending_line_start().is_some() {
            self.needs_redraw = true;
        }

        self.tool_state = match tool {
            Tool::Point => ToolState::Point,
            Tool::Line => ToolState::Line { pending: None },
            Tool::Erase => ToolState::Erase,
        };
        log::debug!("Selected {} tool", tool);
    }

    fn discard_pending_line(&mut self) {
        if let ToolState::Line { pending } = &mut self.tool_state {
            if pending.take().is_some() {
                log::debug!("Discarded pending line endpoint");
            }
        }
    }

    /// Regenerates the output text from the current points and settings.
    pub fn generate_output(&mut self) {
        let (width, height) = self.canvas_dims();
        let text = codec::export_points(
            self.points.points(),
            width,
            height,
            self.offset,
            self.settings.format,
            self.settings.output_type,
        );
        self.output.show(text);
    }

    /// Replaces all points with the named preset shape.
    ///
    /// Unknown names leave the canvas empty. Any line in progress is dropped.
    pub fn generate_shape(&mut self, name: &str) {
        let (width, height) = self.canvas_dims();
        let points = shape::generate(name, width, height);
        log::info!("Generated shape '{}' with {} points", name.trim(), points.len());

        self.selected_shape = name.trim().to_string();
        self.points.replace_all(points);
        self.discard_pending_line();
        self.needs_redraw = true;
        self.generate_output();
    }

    /// Imports `CFrame.new` literals, replacing all points on success.
    ///
    /// # Errors
    /// Returns [`ImportError::InvalidInput`] when the text holds no literal;
    /// the points are left untouched in that case.
    pub fn import_text(&mut self, text: &str) -> Result<usize, ImportError> {
        let (width, height) = self.canvas_dims();
        let points = codec::parse_cframe_points(text, self.offset, width, height)?;
        let count = points.len();

        self.points.replace_all(points);
        self.discard_pending_line();
        self.needs_redraw = true;
        self.generate_output();
        log::info!("Imported {} points", count);
        Ok(count)
    }

    /// Removes every point, empties the output and resets the shape selector.
    pub fn clear(&mut self) {
        self.points.clear();
        self.discard_pending_line();
        self.output.clear();
        self.selected_shape.clear();
        self.needs_redraw = true;
    }

    /// Sets one offset from raw field text. Unparseable text becomes NaN.
    pub fn set_offset(&mut self, axis: OffsetAxis, text: &str) {
        let value = parse_number(text);
        if value.is_nan() {
            log::warn!("Offset {:?} '{}' is not a number", axis, text);
        }
        match axis {
            OffsetAxis::X => self.offset.x = value,
            OffsetAxis::Y => self.offset.y = value,
            OffsetAxis::Z => self.offset.z = value,
        }
        self.generate_output();
    }

    /// Resizes the canvas. Points keep their pixel positions.
    pub fn resize_canvas(&mut self, size: u32) {
        let (min, max) = CANVAS_SIZE_RANGE;
        let clamped = size.clamp(min, max);
        if clamped != size {
            log::warn!(
                "Canvas size {} out of range, clamping to {}-{}",
                size,
                min,
                max
            );
        }
        self.canvas_size = clamped;
        self.needs_redraw = true;
    }

    /// Applies a toggle change from either control surface.
    ///
    /// Both copies of the control end up with the new value. Output-affecting
    /// changes from the main controls always regenerate the output; from the
    /// settings panel they only do so while auto-update is on. Grid changes
    /// only trigger a redraw.
    pub fn apply_setting(&mut self, change: SettingChange, origin: ChangeOrigin) {
        self.settings.apply(change);
        self.modal.apply(change);
        log::debug!("Setting changed via {:?}: {:?}", origin, change);

        if change.affects_output() {
            let regenerate = match origin {
                ChangeOrigin::Primary => true,
                ChangeOrigin::Modal => self.settings.auto_update,
            };
            if regenerate {
                self.generate_output();
            }
        } else if !matches!(change, SettingChange::AutoUpdate(_)) {
            self.needs_redraw = true;
        }
    }

    /// Opens the settings panel, refreshing its controls from the main ones.
    pub fn open_settings(&mut self) {
        self.modal.open(&self.settings);
    }

    pub fn close_settings(&mut self) {
        self.modal.close();
    }
}
