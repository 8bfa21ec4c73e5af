mod actions;
mod core;
mod mouse;

pub use actions::Feedback;
pub use core::{ChangeOrigin, PickerState, ToolState};
pub use mouse::ClickOutcome;
