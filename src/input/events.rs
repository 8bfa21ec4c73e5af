//! Interaction events and their textual command form.
//!
//! Every user interaction (canvas click, control change, button press) is an
//! [`Action`]. Actions are parsed from single command lines so that a session
//! can be driven from a terminal or a script file.

use super::tool::Tool;
use crate::config::{OutputFormat, OutputType};
use crate::util::{parse_number, parse_toggle};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while turning a command line into an [`Action`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("invalid value for '{command}': {reason}")]
    InvalidArgument {
        command: &'static str,
        reason: String,
    },
}

/// One of the three offset fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetAxis {
    X,
    Y,
    Z,
}

impl FromStr for OffsetAxis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(OffsetAxis::X),
            "y" => Ok(OffsetAxis::Y),
            "z" => Ok(OffsetAxis::Z),
            other => Err(format!("unknown axis '{}' (expected x, y or z)", other)),
        }
    }
}

/// A change to one of the toggles mirrored between the main controls and the
/// settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingChange {
    Grid(bool),
    GridSize(u32),
    Snap(bool),
    Format(OutputFormat),
    Type(OutputType),
    AutoUpdate(bool),
}

impl SettingChange {
    /// Whether this change affects the generated text (as opposed to only the canvas).
    pub fn affects_output(&self) -> bool {
        matches!(self, SettingChange::Format(_) | SettingChange::Type(_))
    }

    /// Parses `<setting> <value>`, e.g. `snap on` or `type vector3`.
    fn parse(command: &'static str, name: &str, value: Option<&str>) -> Result<Self, CommandError> {
        let value = value.ok_or(CommandError::MissingArgument {
            command,
            expected: "a value",
        })?;
        let invalid = |reason: String| CommandError::InvalidArgument { command, reason };
        let toggle = |v: &str| parse_toggle(v).ok_or_else(|| invalid(format!("'{}' is not on/off", v)));

        match name {
            "grid" => Ok(SettingChange::Grid(toggle(value)?)),
            "snap" => Ok(SettingChange::Snap(toggle(value)?)),
            "auto-update" | "autoupdate" => Ok(SettingChange::AutoUpdate(toggle(value)?)),
            "grid-size" | "gridsize" => parse_grid_size(value)
                .map(SettingChange::GridSize)
                .ok_or_else(|| invalid(format!("'{}' is not a positive integer", value))),
            "format" => value.parse().map(SettingChange::Format).map_err(invalid),
            "type" => value.parse().map(SettingChange::Type).map_err(invalid),
            other => Err(invalid(format!("unknown setting '{}'", other))),
        }
    }
}

/// Parses a grid size the way an integer form field would: leading integer, must be positive.
fn parse_grid_size(value: &str) -> Option<u32> {
    let n = parse_number(value);
    if n.is_finite() && n >= 1.0 && n <= u32::MAX as f64 {
        Some(n.trunc() as u32)
    } else {
        None
    }
}

/// All interactions a picker session understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Pointer click at canvas coordinates
    Click { x: f64, y: f64 },
    /// Tool button pressed
    SelectTool(Tool),
    /// Shape selector changed (unknown names clear the canvas)
    Shape(String),
    /// Import button pressed with the given text
    Import(String),
    /// Import the contents of a file
    ImportFile(PathBuf),
    /// "Done": regenerate the output text
    Done,
    /// "Clear": remove all points and empty the output
    Clear,
    /// Copy the output text to the clipboard
    Copy,
    /// Write the canvas preview to a PNG file
    Render(Option<PathBuf>),
    /// Offset field edited; the raw text is kept so bad input becomes NaN
    Offset { axis: OffsetAxis, value: String },
    /// Canvas size selector changed
    Resize(u32),
    /// Main control changed
    Set(SettingChange),
    /// Settings panel control changed
    Modal(SettingChange),
    /// Open the settings panel
    OpenSettings,
    /// Close the settings panel
    CloseSettings,
    /// Print a summary of the session
    Status,
    /// Print the command list
    Help,
    /// End the session
    Quit,
}

impl Action {
    /// Parses one command line.
    ///
    /// Blank lines and lines starting with `#` yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Action>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        let mut args = rest.split_whitespace();
        let command = command.to_ascii_lowercase();

        let action = match command.as_str() {
            "click" => {
                let x = args.next();
                let y = args.next();
                match (x, y) {
                    (Some(x), Some(y)) => Action::Click {
                        x: parse_coordinate("click", x)?,
                        y: parse_coordinate("click", y)?,
                    },
                    _ => {
                        return Err(CommandError::MissingArgument {
                            command: "click",
                            expected: "<x> <y>",
                        });
                    }
                }
            }
            "tool" => {
                let name = args.next().ok_or(CommandError::MissingArgument {
                    command: "tool",
                    expected: "point, line or erase",
                })?;
                let tool = name.parse().map_err(|reason| CommandError::InvalidArgument {
                    command: "tool",
                    reason,
                })?;
                Action::SelectTool(tool)
            }
            "point" => Action::SelectTool(Tool::Point),
            "line" => Action::SelectTool(Tool::Line),
            "erase" => Action::SelectTool(Tool::Erase),
            "shape" => Action::Shape(rest.to_string()),
            "import" => Action::Import(rest.to_string()),
            "import-file" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "import-file",
                        expected: "a path",
                    });
                }
                Action::ImportFile(PathBuf::from(rest))
            }
            "done" | "output" => Action::Done,
            "clear" => Action::Clear,
            "copy" => Action::Copy,
            "render" => Action::Render((!rest.is_empty()).then(|| PathBuf::from(rest))),
            "offset" => {
                let axis = args.next().ok_or(CommandError::MissingArgument {
                    command: "offset",
                    expected: "<x|y|z> <value>",
                })?;
                let axis = axis.parse().map_err(|reason| CommandError::InvalidArgument {
                    command: "offset",
                    reason,
                })?;
                let value = args.collect::<Vec<_>>().join(" ");
                Action::Offset { axis, value }
            }
            "size" => {
                let value = args.next().ok_or(CommandError::MissingArgument {
                    command: "size",
                    expected: "a size in pixels",
                })?;
                let size = parse_grid_size(value).ok_or_else(|| CommandError::InvalidArgument {
                    command: "size",
                    reason: format!("'{}' is not a positive integer", value),
                })?;
                Action::Resize(size)
            }
            "grid" | "grid-size" | "gridsize" | "snap" | "format" | "type" | "auto-update"
            | "autoupdate" => {
                Action::Set(SettingChange::parse("set", command.as_str(), args.next())?)
            }
            "modal" => {
                let name = args.next().ok_or(CommandError::MissingArgument {
                    command: "modal",
                    expected: "<setting> <value>",
                })?;
                let name = name.to_ascii_lowercase();
                Action::Modal(SettingChange::parse("modal", name.as_str(), args.next())?)
            }
            "settings" => Action::OpenSettings,
            "close" => Action::CloseSettings,
            "status" => Action::Status,
            "help" | "?" => Action::Help,
            "quit" | "exit" | "q" => Action::Quit,
            _ => return Err(CommandError::UnknownCommand(command)),
        };

        Ok(Some(action))
    }
}

fn parse_coordinate(command: &'static str, value: &str) -> Result<f64, CommandError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CommandError::InvalidArgument {
            command,
            reason: format!("'{}' is not a number", value),
        })
}

/// Command reference printed by `help`.
pub const HELP_TEXT: &str = "\
Canvas:
  click <x> <y>             Click at canvas pixel coordinates
  tool point|line|erase     Select the active tool (also: point, line, erase)
  shape <name>              Replace points with circle, triangle, square, heart or star
  clear                     Remove all points and empty the output
  size <px>                 Resize the canvas
  render [path]             Write the canvas preview as PNG
Output:
  done                      Generate the coordinate list
  copy                      Copy the output to the clipboard
  offset x|y|z <value>      Set a world offset
  format single|multi       Output layout
  type cframe|vector3|vector
                            Output constructor
  import <text>             Import CFrame.new(...) literals
  import-file <path>        Import literals from a file
Settings:
  grid on|off, grid-size <n>, snap on|off, auto-update on|off
  settings                  Open the settings panel
  modal <setting> <value>   Change a setting through the settings panel
  close                     Close the settings panel
Session:
  status, help, quit";
