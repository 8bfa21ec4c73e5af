use crate::codec::ImportError;
use crate::input::events::{Action, HELP_TEXT};
use crate::ui;

use super::{ChangeOrigin, ClickOutcome, PickerState};

/// What the caller should show after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    /// Nothing to report
    None,
    /// The output field was regenerated; show its text
    Output(String),
    /// Informational text (status, settings, help)
    Message(String),
    /// The interaction was refused; the session is unchanged
    Rejected(String),
    /// Place this text on the clipboard and show "Copied!" once it succeeds
    Clipboard(String),
    /// Copy requested while the copy control is hidden
    NothingToCopy,
    /// The session is over
    Exit,
}

impl PickerState {
    /// Dispatches one interaction to its handler.
    ///
    /// File and rendering actions need IO and are performed by the console;
    /// here they are no-ops.
    ///
    /// # Errors
    /// Only imports can fail, with [`ImportError`]; the session is unchanged then.
    pub fn handle_action(&mut self, action: Action) -> Result<Feedback, ImportError> {
        let feedback = match action {
            Action::Click { x, y } => match self.on_click(x, y) {
                ClickOutcome::OutOfBounds => {
                    let size = self.canvas_size();
                    Feedback::Rejected(format!(
                        "click ({}, {}) is outside the {}x{} canvas",
                        x, y, size, size
                    ))
                }
                _ => Feedback::None,
            },
            Action::SelectTool(tool) => {
                self.select_tool(tool);
                Feedback::None
            }
            Action::Shape(name) => {
                self.generate_shape(&name);
                Feedback::Output(self.output.text().to_string())
            }
            Action::Import(text) => {
                let count = self.import_text(&text)?;
                Feedback::Message(format!("Imported {} points", count))
            }
            Action::Done => {
                self.generate_output();
                Feedback::Output(self.output.text().to_string())
            }
            Action::Clear => {
                self.clear();
                Feedback::None
            }
            Action::Copy => match self.output.copyable_text() {
                Some(text) => Feedback::Clipboard(text),
                None => Feedback::NothingToCopy,
            },
            Action::Offset { axis, value } => {
                self.set_offset(axis, &value);
                Feedback::None
            }
            Action::Resize(size) => {
                self.resize_canvas(size);
                Feedback::None
            }
            Action::Set(change) => {
                self.apply_setting(change, ChangeOrigin::Primary);
                Feedback::None
            }
            Action::Modal(change) => {
                self.apply_setting(change, ChangeOrigin::Modal);
                Feedback::None
            }
            Action::OpenSettings => {
                self.open_settings();
                Feedback::Message(ui::describe_settings(self.modal.mirror()))
            }
            Action::CloseSettings => {
                self.close_settings();
                Feedback::None
            }
            Action::Status => Feedback::Message(ui::status_line(self)),
            Action::Help => Feedback::Message(HELP_TEXT.to_string()),
            Action::Quit => {
                self.should_exit = true;
                Feedback::Exit
            }
            Action::ImportFile(_) | Action::Render(_) => {
                log::debug!("{:?} needs the console; ignoring", action);
                Feedback::None
            }
        };
        Ok(feedback)
    }
}
