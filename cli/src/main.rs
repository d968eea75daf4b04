mod script;


use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use drag_resize::{ConfigError, EngineConfig, Event, RectEngine};
use script::{Replay, parse_line};
use tracing::Level;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("no config given: pass --config or set DRAG_RESIZE_CONFIG")]
    MissingConfig,
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("line {line}: invalid command: {source}")]
    Command { line: usize, source: serde_json::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "drag-resize-cli", about = "Replay pointer scripts through the drag-resize engine")]
struct Cli {
    /// Host props as JSON. Accepted before or after the subcommand.
    #[arg(long, env = "DRAG_RESIZE_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the config and print the initial rectangle.
    Check,
    /// Apply a JSONL script (`-` for stdin) and print every event as one JSON line.
    Replay {
        #[arg(default_value = "-")]
        script: String,
        /// Also print the parent-normalized rectangle after the script.
        #[arg(long)]
        normalized: bool,
    },
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_writer(io::stderr).with_max_level(level).init();

    let config = cli.config.ok_or(CliError::MissingConfig)?;
    let engine = load_engine(&config)?;
    match cli.command {
        Command::Check => {
            println!("{}", serde_json::to_string(&engine.snapshot())?);
            Ok(())
        }
        Command::Replay { script, normalized } => run_replay(engine, &script, normalized),
    }
}

fn load_engine(path: &Path) -> Result<RectEngine, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Read { path: path.display().to_string(), source })?;
    let config = EngineConfig::from_json(&raw)?;
    tracing::debug!(?config, "config loaded");
    Ok(RectEngine::new(config)?)
}

fn run_replay(engine: RectEngine, script: &str, normalized: bool) -> Result<(), CliError> {
    let reader: Box<dyn BufRead> = if script == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(script).map_err(|source| CliError::Read { path: script.to_owned(), source })?;
        Box::new(BufReader::new(file))
    };

    let mut replay = Replay::new(engine);
    let mut applied = 0_usize;
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CliError::Read { path: script.to_owned(), source })?;
        let command = parse_line(&line).map_err(|source| CliError::Command { line: index + 1, source })?;
        let Some(command) = command else {
            continue;
        };
        print_events(&replay.apply(&command))?;
        applied += 1;
    }
    print_events(&replay.finish())?;
    tracing::info!(applied, "script replayed");

    if normalized {
        println!("{}", serde_json::to_string(&replay.engine().normalized())?);
    }
    Ok(())
}

fn print_events(events: &[Event]) -> Result<(), CliError> {
    for event in events {
        println!("{}", serde_json::to_string(event)?);
    }
    Ok(())
}
