//! Time-travel tic-tac-toe: rules, history controller and view derivation.

mod action;
mod controller;
mod history;
mod position;
mod types;
mod view;

pub mod invariants;
pub mod rules;

pub use action::{Action, ActionParseError};
pub use controller::{GameController, HistoryError, IgnoreReason, MoveOutcome};
pub use history::Snapshot;
pub use position::Position;
pub use rules::WinningLine;
pub use types::{Board, Player, Square};
pub use view::{MoveListEntry, Status, ViewModel, derive_view, describe_step};

/// Alias for the value a player places in a square.
pub type Mark = Player;
