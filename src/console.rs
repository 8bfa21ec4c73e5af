//! Line-oriented command console driving one picker session.
//!
//! The console owns the [`PickerState`], parses each input line into an
//! [`Action`] and performs the IO side of the action (printing, clipboard,
//! PNG previews, reading import files). State changes themselves happen in
//! [`PickerState::handle_action`].

use crate::clipboard;
use crate::config::Config;
use crate::draw::{RenderError, RenderStyle, resolve_output_path, save_preview};
use crate::input::{Action, Feedback, PickerState};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Prompt shown before each command in interactive sessions.
pub const PROMPT: &str = "> ";

/// Command loop around a single picker session.
pub struct Console {
    state: PickerState,
    style: RenderStyle,
    output_dir: Option<PathBuf>,
    interactive: bool,
}

impl Console {
    /// Creates a console with an empty session configured from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            state: PickerState::from_config(config),
            style: RenderStyle::from_config(&config.render),
            output_dir: config.render.output_dir.clone(),
            interactive: false,
        }
    }

    /// Enables the prompt for terminal sessions.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PickerState {
        &mut self.state
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// Results go to `out`; errors are reported on `err` and never end the
    /// loop. Only failures to write to `out`/`err` or read `input` are returned.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        input: R,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<()> {
        if self.interactive {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }

        for line in input.lines() {
            let line = line?;
            self.execute_line(&line, out, err)?;
            if self.state.should_exit {
                log::info!("Session ended by quit command");
                return Ok(());
            }
            if self.interactive {
                write!(out, "{}", PROMPT)?;
                out.flush()?;
            }
        }

        log::debug!("End of input reached");
        Ok(())
    }

    /// Parses and executes one command line.
    pub fn execute_line<W: Write, E: Write>(
        &mut self,
        line: &str,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<()> {
        match Action::parse(line) {
            Ok(Some(action)) => self.execute(action, out, err),
            Ok(None) => Ok(()),
            Err(e) => {
                log::debug!("Rejected command '{}': {}", line.trim(), e);
                writeln!(err, "Error: {}", e)
            }
        }
    }

    /// Executes one action, performing any IO it requires.
    pub fn execute<W: Write, E: Write>(
        &mut self,
        action: Action,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<()> {
        let action = match action {
            Action::Render(path) => {
                return match self.render(path.as_deref()) {
                    Ok(written) => writeln!(out, "Saved preview to {}", written.display()),
                    Err(e) => {
                        log::error!("Failed to render preview: {}", e);
                        writeln!(err, "Error: {}", e)
                    }
                };
            }
            Action::ImportFile(path) => match fs::read_to_string(&path) {
                Ok(text) => Action::Import(text),
                Err(e) => {
                    log::warn!("Failed to read {}: {}", path.display(), e);
                    return writeln!(err, "Error: failed to read {}: {}", path.display(), e);
                }
            },
            other => other,
        };

        match self.state.handle_action(action) {
            Ok(feedback) => self.report(feedback, out, err),
            Err(e) => writeln!(err, "Error: {}", e),
        }
    }

    fn report<W: Write, E: Write>(
        &mut self,
        feedback: Feedback,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<()> {
        match feedback {
            Feedback::None | Feedback::Exit => Ok(()),
            Feedback::Output(text) | Feedback::Message(text) => writeln!(out, "{}", text),
            Feedback::Rejected(reason) => writeln!(err, "Error: {}", reason),
            Feedback::Clipboard(text) => match clipboard::copy_text(&text) {
                Ok(()) => {
                    let now = Instant::now();
                    self.state.output.mark_copied(now);
                    writeln!(out, "{}", self.state.output.copy_label(now))
                }
                Err(e) => {
                    log::warn!("Clipboard copy failed: {}", e);
                    writeln!(err, "Error: {}", e)
                }
            },
            Feedback::NothingToCopy => writeln!(err, "Nothing to copy; run 'done' first"),
        }
    }

    /// Writes the canvas preview to `path`, or to a timestamped file in the
    /// configured output directory.
    pub fn render(&self, path: Option<&Path>) -> Result<PathBuf, RenderError> {
        let target = resolve_output_path(path, self.output_dir.as_deref());
        save_preview(&self.state, &self.style, &target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(console: &mut Console, script: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        console
            .run(script.as_bytes(), &mut out, &mut err)
            .expect("in-memory IO should not fail");
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn console() -> Console {
        Console::new(&Config::default())
    }

    #[test]
    fn click_and_done_prints_literals() {
        let mut console = console();
        let (out, err) = run_script(&mut console, "click 250 250\nclick 300 250\ndone\n");
        assert_eq!(
            out,
            "{\n    CFrame.new(0.00, 0.00, 0.00),\n    CFrame.new(1.00, 0.00, 0.00)\n}\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn blank_lines_and_comments_are_ignored() {
        let mut console = console();
        let (out, err) = run_script(&mut console, "\n# setup\n   \ndone\n");
        assert_eq!(out, "No points selected!\n");
        assert!(err.is_empty());
    }

    #[test]
    fn bad_import_reports_error_and_continues() {
        let mut console = console();
        let (out, err) = run_script(
            &mut console,
            "click 100 100\nimport Vector3.new(1, 2, 3)\nstatus\n",
        );
        assert_eq!(err, "Error: Invalid input format\n");
        assert!(out.contains("Points: 1"));
    }

    #[test]
    fn off_canvas_click_is_reported_and_session_continues() {
        let mut console = console();
        let (out, err) = run_script(&mut console, "line\nclick 0 0\nclick 1e300 0\nstatus\n");
        assert!(err.starts_with("Error: click ("));
        assert!(err.contains("is outside the 500x500 canvas"));
        assert!(out.contains("Points: 0"));
    }

    #[test]
    fn unknown_command_is_reported() {
        let mut console = console();
        let (_, err) = run_script(&mut console, "frobnicate\n");
        assert!(err.contains("unknown command 'frobnicate'"));
    }

    #[test]
    fn quit_stops_reading() {
        let mut console = console();
        let (out, _) = run_script(&mut console, "quit\ndone\n");
        assert!(out.is_empty());
        assert!(console.state().should_exit);
    }

    #[test]
    fn copy_without_output_is_refused() {
        let mut console = console();
        let (out, err) = run_script(&mut console, "copy\n");
        assert!(out.is_empty());
        assert!(err.starts_with("Nothing to copy"));
    }

    #[test]
    fn import_file_replaces_points() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("points.lua");
        fs::write(
            &path,
            "local points = {\n    CFrame.new(1.00, 0.00, 2.00),\n    CFrame.new(-1.00, 0.00, 0.00)\n}",
        )
        .unwrap();

        let mut console = console();
        let (out, err) = run_script(&mut console, &format!("import-file {}\n", path.display()));
        assert!(err.is_empty(), "unexpected error: {}", err);
        assert!(out.starts_with("Imported 2 points"));
        assert_eq!(console.state().points.len(), 2);
    }

    #[test]
    fn missing_import_file_is_reported() {
        let mut console = console();
        let (_, err) = run_script(&mut console, "import-file /nonexistent/points.txt\n");
        assert!(err.starts_with("Error: failed to read"));
    }

    #[test]
    fn render_command_writes_png() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("preview.png");

        let mut console = console();
        let (out, err) = run_script(
            &mut console,
            &format!("shape heart\nrender {}\n", path.display()),
        );
        assert!(err.is_empty(), "unexpected error: {}", err);
        assert!(out.contains("Saved preview to"));
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }

    #[test]
    fn render_without_path_uses_output_dir() {
        let temp = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.render.output_dir = Some(temp.path().to_path_buf());

        let console = Console::new(&config);
        let written = console.render(None).unwrap();
        assert!(written.starts_with(temp.path()));
        assert!(written.exists());
    }
}
