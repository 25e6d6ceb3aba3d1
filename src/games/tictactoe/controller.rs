//! Game state controller: move history, time travel and list ordering.
//!
//! The controller owns the authoritative history of board snapshots and a
//! pointer to the step being viewed. Whose turn it is follows from the
//! parity of that pointer and is never stored.
//!
//! Three operations mutate it:
//! - [`GameController::apply_move`] truncates any history after the current
//!   step, then appends the new snapshot (branch-on-write).
//! - [`GameController::jump_to`] moves the step pointer.
//! - [`GameController::toggle_order`] flips the order preference and
//!   reverses the stored history in place. The step pointer is left where
//!   it is, so it now addresses a different snapshot, and later moves
//!   truncate and append against the reversed storage.

use super::history::Snapshot;
use super::invariants::{ControllerInvariants, Invariant, InvariantSet, LinearHistory};
use super::rules::{WinningLine, find_winning_line};
use super::{Board, Player, Position};
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum IgnoreReason {
    /// The current board already has a winner.
    #[display("{} has already won", _0)]
    GameWon(Player),
    /// The target square is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),
}

/// Result of [`GameController::apply_move`].
///
/// Invalid moves are not errors: they leave the state untouched and
/// report why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveOutcome {
    /// The move was recorded; the controller now sits at `step`.
    Applied {
        /// New current step.
        step: usize,
    },
    /// The move was ignored.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Returns true if the move changed the state.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Errors for inputs outside the controller's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// Step index is past the end of the history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
    /// Board index is not in 0-8.
    #[display("Square index {} is out of bounds (must be 0-8)", _0)]
    InvalidIndex(#[error(not(source))] usize),
}

/// Time-travel tic-tac-toe state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameController {
    pub(super) history: Vec<Snapshot>,
    pub(super) current_step: usize,
    pub(super) order_reversed: bool,
}

impl GameController {
    /// Creates a controller holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::initial()],
            current_step: 0,
            order_reversed: false,
        }
    }

    /// Returns the history in storage order.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Returns the step being viewed.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns true if the move list order has been toggled.
    pub fn is_order_reversed(&self) -> bool {
        self.order_reversed
    }

    /// Returns the snapshot at the current step.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.current_step]
    }

    /// Returns the board at the current step.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Player to move at the current step: X on even steps, O on odd.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Completed line on the current board, if any.
    pub fn winner(&self) -> Option<WinningLine> {
        find_winning_line(self.board())
    }

    /// Returns true if every snapshot adds exactly one alternating mark
    /// to its predecessor, in storage order.
    ///
    /// Always true until the order is toggled.
    pub fn is_linear(&self) -> bool {
        LinearHistory::holds(self)
    }

    /// Marks `pos` for the player to move.
    ///
    /// Ignored when the current board is already won or `pos` is occupied.
    /// Otherwise discards every snapshot after the current step, appends
    /// the new one and moves to it.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player()))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        let current = self.current();

        if let Some(win) = find_winning_line(current.board()) {
            debug!(winner = %win.mark, "Ignoring move on a won board");
            return MoveOutcome::Ignored(IgnoreReason::GameWon(win.mark));
        }

        if !current.board().is_empty(pos) {
            debug!("Ignoring move on an occupied square");
            return MoveOutcome::Ignored(IgnoreReason::SquareOccupied(pos));
        }

        let next = current.successor(pos, self.next_player());
        let discarded = self.history.len() - (self.current_step + 1);
        self.history.truncate(self.current_step + 1);
        self.history.push(next);
        self.current_step = self.history.len() - 1;

        debug!(
            new_step = self.current_step,
            discarded,
            label = %pos.coordinate_label(),
            "Move applied"
        );
        self.check_invariants();

        MoveOutcome::Applied {
            step: self.current_step,
        }
    }

    /// Same as [`apply_move`](Self::apply_move) for a raw board index.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidIndex`] if `index` is not 0-8.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Result<MoveOutcome, HistoryError> {
        let pos = Position::from_index(index).ok_or(HistoryError::InvalidIndex(index))?;
        Ok(self.apply_move(pos))
    }

    /// Moves the step pointer. History is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if `step` does not index
    /// the history; the state is left untouched.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.history.len() {
            warn!(len = self.history.len(), "Jump target out of range");
            return Err(HistoryError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        self.current_step = step;
        debug!(next_player = %self.next_player(), "Jumped");
        self.check_invariants();
        Ok(())
    }

    /// Flips the move list order and reverses the stored history.
    #[instrument(skip(self), fields(reversed = self.order_reversed))]
    pub fn toggle_order(&mut self) {
        self.order_reversed = !self.order_reversed;
        self.history.reverse();
        debug!(
            reversed = self.order_reversed,
            step = self.current_step,
            "History order toggled"
        );
        self.check_invariants();
    }

    fn check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        if let Err(violations) = ControllerInvariants::check_all(self) {
            for violation in &violations {
                warn!(invariant = %violation.description, "Controller invariant violated");
            }
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
