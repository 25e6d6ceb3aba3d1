//! Step bounds invariant: the current step always addresses a snapshot.

use super::super::GameController;
use super::Invariant;

/// Invariant: `current_step < history.len()`.
pub struct StepInBounds;

impl Invariant<GameController> for StepInBounds {
    fn holds(controller: &GameController) -> bool {
        controller.current_step < controller.history.len()
    }

    fn description() -> &'static str {
        "Current step indexes an existing snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_new_game_holds() {
        assert!(StepInBounds::holds(&GameController::new()));
    }

    #[test]
    fn test_holds_after_jump_and_branch() {
        let mut controller = GameController::new();
        controller.apply_move(Position::TopLeft);
        controller.apply_move(Position::Center);
        controller.jump_to(0).expect("step 0 exists");
        controller.apply_move(Position::BottomRight);
        assert!(StepInBounds::holds(&controller));
        assert_eq!(controller.history().len(), 2);
    }

    #[test]
    fn test_dangling_step_violates() {
        let mut controller = GameController::new();
        controller.current_step = 1;
        assert!(!StepInBounds::holds(&controller));
    }
}
