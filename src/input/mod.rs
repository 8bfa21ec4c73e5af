//! Input handling and tool state machine.
//!
//! This module translates user interactions (canvas clicks, control changes,
//! button presses) into point edits. It owns the session state, the active
//! tool, and the pending line endpoint.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Action, CommandError, OffsetAxis, SettingChange};
pub use state::{ChangeOrigin, ClickOutcome, Feedback, PickerState, ToolState};
pub use tool::Tool;
