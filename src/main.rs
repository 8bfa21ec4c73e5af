use anyhow::Context;
use cframe_picker::Config;
use cframe_picker::clipboard;
use cframe_picker::console::Console;
use clap::{ArgAction, Parser};
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CFRAME_PICKER_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "cframe-picker")]
#[command(
    version = VERSION,
    about = "Pick 2D points on a canvas and export them as CFrame/Vector3 literals"
)]
struct Cli {
    /// Config file to use instead of ~/.config/cframe-picker/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,

    /// Read commands from FILE instead of standard input
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Canvas edge length in pixels (overrides the config)
    #[arg(long, value_name = "PX")]
    size: Option<u32>,

    /// Start from a preset shape (circle, triangle, square, heart, star)
    #[arg(long, value_name = "NAME")]
    shape: Option<String>,

    /// Start from the CFrame literals in FILE
    #[arg(long, value_name = "FILE")]
    import: Option<PathBuf>,

    /// Write a PNG preview of the final canvas to PATH
    #[arg(long, value_name = "PATH")]
    render: Option<PathBuf>,

    /// Print the generated literals when the session ends
    #[arg(long, action = ArgAction::SetTrue)]
    print: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file(cli.config.as_deref())?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let mut config = Config::load_from(cli.config.as_deref())?;
    if let Some(size) = cli.size {
        config.canvas.size = size;
        config.validate_and_clamp();
    }

    if !clipboard::is_clipboard_available() {
        log::debug!("wl-copy not found; copy will use the wl-clipboard-rs fallback");
    }

    let mut console = Console::new(&config);

    if let Some(name) = &cli.shape {
        console.state_mut().generate_shape(name);
    }

    if let Some(path) = &cli.import {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read import file {}", path.display()))?;
        let count = console
            .state_mut()
            .import_text(&text)
            .with_context(|| format!("Failed to import {}", path.display()))?;
        log::info!("Loaded {} points from {}", count, path.display());
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            console.run(BufReader::new(file), &mut out, &mut err)?;
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            let one_shot = cli.render.is_some() || cli.print;

            // Flags alone describe a complete job; only prompt when nothing else was asked
            if !(interactive && one_shot) {
                if interactive {
                    println!("cframe-picker {} - type 'help' for commands", VERSION);
                }
                console.set_interactive(interactive);
                console.run(stdin.lock(), &mut out, &mut err)?;
            }
        }
    }

    if let Some(path) = &cli.render {
        let written = console
            .render(Some(path))
            .with_context(|| format!("Failed to render preview to {}", path.display()))?;
        println!("Saved preview to {}", written.display());
    }

    if cli.print {
        let state = console.state_mut();
        state.generate_output();
        println!("{}", state.output.text());
    }

    Ok(())
}
