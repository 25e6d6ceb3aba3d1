//! Board snapshots recorded in the move history.

use super::{Board, Player, Position, Square};
use serde::Serialize;

/// The board immediately after a play, with the square that was played.
///
/// The initial snapshot is an empty board with no position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub(super) board: Board,
    pub(super) position: Option<Position>,
}

impl Snapshot {
    /// The empty board every game starts from.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            position: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the square played to reach this snapshot.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// `"(col, row)"` label of the square played, if any.
    pub fn label(&self) -> Option<String> {
        self.position.map(Position::coordinate_label)
    }

    /// Returns true if this is an initial (unplayed) snapshot.
    pub fn is_origin(&self) -> bool {
        self.position.is_none()
    }

    /// Builds the snapshot that follows this one when `player` marks `pos`.
    ///
    /// The caller guarantees `pos` is empty on this board.
    pub(super) fn successor(&self, pos: Position, player: Player) -> Self {
        let mut board = self.board.clone();
        board.set(pos, Square::Occupied(player));
        Self {
            board,
            position: Some(pos),
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
