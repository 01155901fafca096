mod config;
mod game;
mod parse;
mod repl;
mod replay;
mod tui;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::ViewConfig;

#[derive(Args, Debug, Clone, Copy, Default)]
struct ViewParams {
    /// Hide the disc counts until the game ends
    #[arg(long, global = true)]
    hide_score: bool,

    /// Do not mark the legal moves
    #[arg(long, global = true)]
    hide_legal_moves: bool,

    /// Do not highlight the last move
    #[arg(long, global = true)]
    hide_last_move: bool,
}

impl From<ViewParams> for ViewConfig {
    fn from(params: ViewParams) -> Self {
        ViewConfig {
            show_score: !params.hide_score,
            show_legal_moves: !params.hide_legal_moves,
            highlight_last_move: !params.hide_last_move,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "reversi", version, about = "Play Reversi in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    #[command(flatten)]
    view_params: ViewParams,

    /// Use the line-based interface instead of the full-screen one
    #[arg(long)]
    plain: bool,

    /// Write logs to this file (filtered by RUST_LOG, default "warn")
    #[arg(
        long = "log-file",
        value_name = "FILE",
        value_hint = clap::ValueHint::FilePath,
        global = true
    )]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Play a move record such as "f5d6c3" and print the final position
    Replay {
        #[arg()]
        moves: String,
    },
}

fn main() {
    let args = Cli::parse();

    if let Some(path) = args.log_file.as_deref() {
        init_logging(path).unwrap_or_else(|err| {
            eprintln!("Failed to initialize logging: {err}");
            std::process::exit(1);
        });
    }

    let view = ViewConfig::from(args.view_params);
    let result = match args.command {
        Some(SubCommands::Replay { moves }) => replay::run(&moves, view),
        None if args.plain => repl::ui_loop(view),
        None => tui::run(view),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// Installs a fmt subscriber writing to `path`.
///
/// The terminal belongs to the UI, so logs never go to stdout or stderr.
fn init_logging(path: &Path) -> Result<(), String> {
    let file = File::create(path)
        .map_err(|e| format!("cannot create log file {}: {e}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| e.to_string())
}
