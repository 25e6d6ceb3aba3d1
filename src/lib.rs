//! Strictly Timeline - time-travel tic-tac-toe.
//!
//! A tic-tac-toe engine that keeps every board it has shown. Players can
//! jump back to any earlier step and branch off a new line of play.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation over a board
//! - **Controller**: move history, step pointer and list ordering
//! - **View**: a [`ViewModel`] derived from the controller after every change
//! - **TUI**: a ratatui front-end that draws the view and forwards keys
//!
//! # Example
//!
//! ```
//! use strictly_timeline::{GameController, Position, derive_view};
//!
//! let mut game = GameController::new();
//! game.apply_move(Position::Center);
//! game.apply_move(Position::TopLeft);
//! game.jump_to(1).unwrap();
//!
//! let view = derive_view(&game);
//! assert_eq!(view.status().to_string(), "Next player: O");
//! assert_eq!(view.moves()[1].description(), "Go to move #1 (2, 2)");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod replay;

pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, TimelineConfig};

// Crate-level exports - Replay
pub use replay::{ReplayError, replay};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, ActionParseError, Board, GameController, HistoryError, IgnoreReason, Mark,
    MoveListEntry, MoveOutcome, Player, Position, Snapshot, Square, Status, ViewModel,
    WinningLine, derive_view, describe_step,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::invariants;
pub use games::tictactoe::rules;
