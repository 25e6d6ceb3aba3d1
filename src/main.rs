//! Strictly Timeline - Unified CLI
//!
//! Terminal tic-tac-toe with move history and time travel.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use std::fs::File;
use std::sync::Mutex;
use strictly_timeline::{Action, TimelineConfig, derive_view};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = TimelineConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { actions, format } => run_replay(&config, &actions, format),
    }
}

/// Run the terminal UI. Logs go to `log_file` so they do not corrupt the screen.
fn run_play(config: &TimelineConfig) -> Result<()> {
    let filter = env_filter(config);
    match config.log_file() {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .init();
        }
    }

    strictly_timeline::tui::run(config)
}

/// Apply scripted actions and print the final view
fn run_replay(config: &TimelineConfig, actions: &[Action], format: OutputFormat) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();

    info!(count = actions.len(), "Replaying actions");
    let controller = strictly_timeline::replay(actions).context("Replay failed")?;
    let view = derive_view(&controller);

    match format {
        OutputFormat::Text => print!("{}", view.render_text()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&view).context("Failed to serialize view")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// `RUST_LOG` wins over the configured filter.
fn env_filter(config: &TimelineConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}
