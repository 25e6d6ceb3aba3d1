//! Recorded squares invariant: every snapshot matches the square it records.

use super::super::GameController;
use super::Invariant;

/// Invariant: a snapshot with a position has that square occupied, and a
/// snapshot without one is the empty starting board.
///
/// Holds no matter how the history is branched or reversed, since every
/// snapshot is built from its predecessor by marking the recorded square.
pub struct RecordedSquares;

impl Invariant<GameController> for RecordedSquares {
    fn holds(controller: &GameController) -> bool {
        controller.history.iter().all(|snapshot| match snapshot.position() {
            Some(pos) => !snapshot.board().is_empty(pos),
            None => snapshot.board().occupied_count() == 0,
        })
    }

    fn description() -> &'static str {
        "Every snapshot has its recorded square occupied"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Player, Position, Snapshot};

    #[test]
    fn test_new_game_holds() {
        assert!(RecordedSquares::holds(&GameController::new()));
    }

    #[test]
    fn test_holds_after_toggle_and_branch() {
        let mut controller = GameController::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            controller.apply_move(pos);
        }
        controller.toggle_order();
        controller.jump_to(1).expect("step exists");
        controller.apply_move(Position::TopRight);
        assert!(RecordedSquares::holds(&controller));
    }

    #[test]
    fn test_unmarked_record_violates() {
        let mut controller = GameController::new();
        controller.apply_move(Position::Center);
        controller.history[1].board = Board::new();
        assert!(!RecordedSquares::holds(&controller));
    }

    #[test]
    fn test_marked_origin_violates() {
        let mut controller = GameController::new();
        controller.history[0] = Snapshot::initial().successor(Position::Center, Player::X);
        controller.history[0].position = None;
        assert!(!RecordedSquares::holds(&controller));
    }
}
