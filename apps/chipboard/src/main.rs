use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use board_core::{export_program, parse_program, ChipCatalog, Editor, EventLog};
use clap::{Parser, Subcommand};
use shared::{domain::ProgramType, error::ApiError, protocol::Command as EditorCommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod config;
mod render;

use config::{load_settings, Settings};

#[derive(Parser, Debug)]
#[command(name = "chipboard", about = "Edit and inspect chip programs")]
struct Cli {
    /// Settings file; defaults to ./chipboard.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print an empty editor snapshot.
    New {
        #[arg(long)]
        length: Option<usize>,
    },
    /// Import a program document and report what it holds.
    Validate {
        file: PathBuf,
        #[arg(long, default_value = "main", value_parser = parse_program_type)]
        program: ProgramType,
    },
    /// Print a program as a text grid.
    Render {
        file: PathBuf,
        #[arg(long, default_value = "main", value_parser = parse_program_type)]
        program: ProgramType,
        /// Print the normalized interchange JSON instead of the grid.
        #[arg(long)]
        json: bool,
    },
    /// Dispatch a JSON array of commands and print the final snapshot.
    Replay {
        script: PathBuf,
        #[arg(long)]
        length: Option<usize>,
        /// Also print the event log, newest first.
        #[arg(long)]
        log: bool,
    },
}

fn parse_program_type(raw: &str) -> Result<ProgramType, String> {
    raw.to_ascii_uppercase()
        .parse()
        .map_err(|err| format!("{err}; expected main or missile"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    debug!(?settings, "settings loaded");

    match cli.command {
        Command::New { length } => {
            let length = board_length(&settings, length)?;
            let editor = Editor::new(length);
            println!("{}", serde_json::to_string_pretty(&editor.snapshot())?);
        }
        Command::Validate { file, program } => {
            let loaded = load_program(&file, program)?;
            println!(
                "ok: {} chips on a {}x{} {program} program",
                loaded.chip_count(),
                loaded.width(),
                loaded.height()
            );
        }
        Command::Render {
            file,
            program,
            json,
        } => {
            let loaded = load_program(&file, program)?;
            if json {
                println!("{}", export_program(&loaded)?);
            } else {
                println!("{}", render::render_program(&loaded));
            }
        }
        Command::Replay {
            script,
            length,
            log,
        } => {
            let length = board_length(&settings, length)?;
            replay(&settings, &script, length, log)?;
        }
    }

    Ok(())
}

fn board_length(settings: &Settings, requested: Option<usize>) -> Result<usize> {
    match requested {
        Some(0) => anyhow::bail!("board length must be at least 1"),
        Some(length) => Ok(length),
        None => Ok(settings.board_length),
    }
}

fn load_program(file: &Path, program: ProgramType) -> Result<board_core::Program> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("failed to read program file '{}'", file.display()))?;
    let catalog = ChipCatalog::standard();
    let loaded = parse_program(catalog.registry(program), &raw)
        .with_context(|| format!("'{}' is not a valid {program} program", file.display()))?;
    debug!(program = %program, chips = loaded.chip_count(), "program imported");
    Ok(loaded)
}

fn replay(settings: &Settings, script: &Path, length: usize, show_log: bool) -> Result<()> {
    let raw = fs::read_to_string(script)
        .with_context(|| format!("failed to read script '{}'", script.display()))?;
    let commands: Vec<EditorCommand> = serde_json::from_str(&raw)
        .with_context(|| format!("'{}' is not a JSON array of commands", script.display()))?;

    let mut editor = Editor::with_sink(length, EventLog::new(settings.log_capacity))
        .debug_snapshots(settings.debug_snapshots);

    let total = commands.len();
    let mut failed = 0usize;
    for (index, command) in commands.into_iter().enumerate() {
        let name = command.name();
        if let Err(err) = editor.dispatch(command) {
            failed += 1;
            let api_error = ApiError::from(err);
            eprintln!(
                "command #{index} ({name}) failed: {}",
                serde_json::to_string(&api_error)?
            );
        }
    }
    info!(total, failed, "replay finished");

    println!("{}", serde_json::to_string_pretty(&editor.snapshot())?);
    if show_log {
        println!("--- log ---");
        for line in editor.sink().lines() {
            println!("{line}");
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
