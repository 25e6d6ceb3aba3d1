//! Command-line interface for strictly_timeline.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use strictly_timeline::Action;

/// Strictly Timeline - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_timeline")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply a scripted list of actions and print the resulting view
    Replay {
        /// Actions: m<square> plays a square (0-8 or a name like `center`),
        /// j<step> jumps to a step, t toggles the move list order
        actions: Vec<Action>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How `replay` prints the final view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Board, status and move list as plain text
    Text,
    /// The view model as pretty-printed JSON
    Json,
}
