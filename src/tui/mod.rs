//! Terminal front-end: draws the derived view and forwards keys to the controller.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use input::{digit_square, move_cursor};

use crate::TimelineConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{info, instrument, warn};

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored even when the event loop fails.
#[instrument(skip(config))]
pub fn run(config: &TimelineConfig) -> anyhow::Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen)
        },
    )?;

    let res = run_app(&mut terminal, App::new(), config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Terminal UI closed");
    res
}

/// Runs `setup`, calling `restore` before returning its error if it fails.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> anyhow::Result<T> {
    setup().map_err(|err| {
        if let Err(restore_err) = restore() {
            warn!(error = %restore_err, "Failed to restore terminal");
        }
        err.into()
    })
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    config: &TimelineConfig,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app, config))?;

        if event::poll(config.tick_rate())?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
