use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use sketchgrid::config::Config;
use sketchgrid::draw::{render_json, render_text};
use sketchgrid::input::{SketchState, UiEvent};
use sketchgrid::ui;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Palette, status line and one glyph per cell
    Text,
    /// Full grid state as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "sketchgrid")]
#[command(
    version,
    about = "Etch-a-Sketch drawing grid driven by scripted pointer events"
)]
struct Cli {
    /// Event script to replay, one event per line (reads stdin when omitted)
    #[arg(long, short = 's', value_name = "PATH")]
    script: Option<PathBuf>,

    /// Starting grid size (cells per side)
    #[arg(long, short = 'n', value_name = "N")]
    size: Option<i64>,

    /// Starting tool (draw, erase, rainbow, lighten, darken)
    #[arg(long, short = 't', value_name = "TOOL")]
    tool: Option<String>,

    /// Seed for the rainbow tool, for reproducible output
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Output format for printed grids
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Load configuration from this file instead of ~/.config/sketchgrid/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the commented example configuration and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,

    /// Write the effective configuration (after validation) to PATH and exit
    #[arg(long, value_name = "PATH", conflicts_with = "init_config")]
    save_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file(cli.config.as_deref())?;
        println!("Wrote example configuration to {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(path) = &cli.save_config {
        config.save_to(path)?;
        println!("Wrote effective configuration to {}", path.display());
        return Ok(());
    }

    let mut state = SketchState::from_config(&config, cli.seed)?;
    if let Some(size) = cli.size {
        state
            .on_resize_requested(size)
            .with_context(|| format!("Invalid --size {size}"))?;
    }
    if let Some(tool) = &cli.tool {
        state
            .on_tool_button_clicked(tool)
            .with_context(|| format!("Invalid --tool '{tool}'"))?;
    }

    let reader: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(File::open(path).with_context(|| {
            format!("Failed to open script {}", path.display())
        })?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let reported = replay(&mut state, reader, cli.format, &mut out)?;
    print_state(&state, cli.format, &mut out)?;

    if reported > 0 {
        log::warn!("{reported} event(s) were rejected; see errors above");
    }

    Ok(())
}

/// Feeds every script event to the sketch, returning how many were rejected.
///
/// Rejected events are logged and leave the sketch unchanged; malformed script
/// lines abort the run.
fn replay(
    state: &mut SketchState,
    reader: impl BufRead,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<usize> {
    let mut reported = 0;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read script line {line_no}"))?;

        let event = match UiEvent::parse(&line) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(err) => anyhow::bail!("Script line {line_no}: {err}"),
        };

        log::debug!("line {line_no}: {event}");
        match state.handle_event(&event) {
            Ok(_) if event == UiEvent::Print => print_state(state, format, out)?,
            Ok(_) => {}
            Err(err) => {
                log::error!("line {line_no}: '{event}' rejected: {err}");
                reported += 1;
            }
        }
    }

    Ok(reported)
}

fn print_state(state: &SketchState, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", ui::render_palette(state))?;
            writeln!(out, "{}", ui::render_status_line(state))?;
            let background = state.controller().paints().background;
            write!(out, "{}", render_text(state.grid(), background))?;
        }
        OutputFormat::Json => {
            let json = render_json(state.grid()).context("Failed to serialize grid")?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}
