//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::Serialize;
use tracing::instrument;

/// Winning combinations, checked in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the mark that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WinningLine {
    /// Mark occupying all three squares.
    pub mark: Player,
    /// The three squares, in [`LINES`] order.
    pub line: [Position; 3],
}

impl WinningLine {
    /// Returns true if `pos` is one of the three squares.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Finds the first completed line on the board.
///
/// Lines are scanned in [`LINES`] order, so a malformed board with more
/// than one completed line always reports the same one.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(mark) if sq == board.get(b) && sq == board.get(c) => {
                Some(WinningLine {
                    mark,
                    line: [a, b, c],
                })
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    find_winning_line(board).map(|win| win.mark)
}
