//! View derivation: everything a renderer needs, computed from the controller.
//!
//! [`derive_view`] is a pure function of controller state. Renderers call
//! it after every operation and draw the returned [`ViewModel`]; they never
//! read the history directly.

use super::controller::GameController;
use super::history::Snapshot;
use super::rules::{find_winning_line, is_draw};
use super::{Board, Player, Position};
use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use serde::Serialize;
use tracing::instrument;

/// Status line shown above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum Status {
    /// The current board has a completed line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The current board is full with no completed line.
    #[display("Draw")]
    Draw,
    /// The game continues with this player to move.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct MoveListEntry {
    /// Storage index to pass to [`GameController::jump_to`].
    step: usize,
    /// Button text, e.g. `"Go to move #2 (3, 1)"`.
    description: String,
    /// True for the step currently shown on the board.
    is_current: bool,
}

/// Everything a renderer draws for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ViewModel {
    /// Board at the current step.
    board: Board,
    /// Status line.
    status: Status,
    /// Move list in storage order.
    moves: Vec<MoveListEntry>,
    /// Squares of the completed line, or empty.
    winning_line: Vec<Position>,
}

impl ViewModel {
    /// Returns true if `pos` belongs to the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winning_line.contains(&pos)
    }

    /// The move list entry for the current step.
    pub fn current_entry(&self) -> Option<&MoveListEntry> {
        self.moves.iter().find(|entry| entry.is_current)
    }

    /// Plain-text rendering: board, status and move list.
    ///
    /// The current step is marked with `>`, winning squares are wrapped in
    /// brackets on a separate line.
    pub fn render_text(&self) -> String {
        let mut out = self.board.display();
        out.push_str("\n\n");
        out.push_str(&self.status.to_string());
        out.push('\n');
        if !self.winning_line.is_empty() {
            let squares: Vec<_> = self
                .winning_line
                .iter()
                .map(|pos| format!("[{}]", pos.coordinate_label()))
                .collect();
            out.push_str(&format!("Winning line: {}\n", squares.join(" ")));
        }
        out.push('\n');
        for entry in &self.moves {
            let marker = if entry.is_current { '>' } else { ' ' };
            out.push_str(&format!("{} {}. {}\n", marker, entry.step, entry.description));
        }
        out
    }
}

/// Move list text for the snapshot at storage index `step`.
///
/// In normal order the number is the storage index. In reversed order it
/// counts down from the end, so the last stored snapshot is labeled as the
/// game start.
pub fn describe_step(step: usize, len: usize, reversed: bool, snapshot: &Snapshot) -> String {
    let number = if reversed {
        len.saturating_sub(step + 1)
    } else {
        step
    };

    if number == 0 {
        return "Go to game start".to_string();
    }

    match snapshot.label() {
        Some(label) => format!("Go to move #{} {}", number, label),
        None => format!("Go to move #{}", number),
    }
}

/// Derives the view for the controller's current state.
#[instrument(skip(controller), fields(step = controller.current_step()))]
pub fn derive_view(controller: &GameController) -> ViewModel {
    let board = controller.board().clone();
    let win = find_winning_line(&board);

    let status = match win {
        Some(win) => Status::Winner(win.mark),
        None if is_draw(&board) => Status::Draw,
        None => Status::NextPlayer(controller.next_player()),
    };

    let history = controller.history();
    let moves = history
        .iter()
        .enumerate()
        .map(|(step, snapshot)| {
            MoveListEntry::new(
                step,
                describe_step(step, history.len(), controller.is_order_reversed(), snapshot),
                step == controller.current_step(),
            )
        })
        .collect();

    ViewModel {
        board,
        status,
        moves,
        winning_line: win.map(|w| w.line.to_vec()).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_view() {
        let view = derive_view(&GameController::new());
        assert_eq!(view.status(), &Status::NextPlayer(Player::X));
        assert_eq!(view.status().to_string(), "Next player: X");
        assert_eq!(view.moves().len(), 1);
        assert_eq!(view.moves()[0].description(), "Go to game start");
        assert!(*view.moves()[0].is_current());
        assert!(view.winning_line().is_empty());
    }

    #[test]
    fn test_normal_order_descriptions() {
        let mut controller = GameController::new();
        controller.apply_move(Position::TopRight);
        controller.apply_move(Position::Center);
        let view = derive_view(&controller);
        let descriptions: Vec<_> = view.moves().iter().map(|m| m.description().as_str()).collect();
        assert_eq!(
            descriptions,
            ["Go to game start", "Go to move #1 (3, 1)", "Go to move #2 (2, 2)"]
        );
        assert_eq!(view.current_entry().map(|e| *e.step()), Some(2));
    }

    #[test]
    fn test_reversed_order_descriptions() {
        let mut controller = GameController::new();
        controller.apply_move(Position::TopRight);
        controller.apply_move(Position::Center);
        controller.toggle_order();
        let view = derive_view(&controller);
        let descriptions: Vec<_> = view.moves().iter().map(|m| m.description().as_str()).collect();
        assert_eq!(
            descriptions,
            ["Go to move #2 (2, 2)", "Go to move #1 (3, 1)", "Go to game start"]
        );
        // The step pointer stayed at 2, which now holds the empty board.
        assert!(*view.moves()[2].is_current());
        assert_eq!(view.status(), &Status::NextPlayer(Player::X));
    }

    #[test]
    fn test_describe_unlabeled_snapshot() {
        let origin = Snapshot::initial();
        assert_eq!(describe_step(1, 3, true, &origin), "Go to move #1");
        assert_eq!(describe_step(2, 3, true, &origin), "Go to game start");
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut controller = GameController::new();
        for i in [0, 4, 8, 1, 7, 6, 2, 5, 3] {
            controller.apply_index(i).expect("index in range");
        }
        let view = derive_view(&controller);
        assert_eq!(view.status(), &Status::Draw);
        assert!(view.winning_line().is_empty());
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let mut controller = GameController::new();
        for i in [1, 0, 3, 2, 6, 4, 8, 5, 7] {
            controller.apply_index(i).expect("index in range");
        }
        let view = derive_view(&controller);
        assert_eq!(view.status(), &Status::Winner(Player::X));
        assert_ne!(view.status().to_string(), "Draw");
    }

    #[test]
    fn test_winner_view_highlights_line() {
        let mut controller = GameController::new();
        for i in [0, 3, 1, 4, 2] {
            controller.apply_index(i).expect("index in range");
        }
        let view = derive_view(&controller);
        assert_eq!(view.status().to_string(), "Winner: X");
        assert_eq!(
            view.winning_line(),
            &vec![Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
        assert!(view.is_highlighted(Position::TopCenter));
        assert!(!view.is_highlighted(Position::Center));
    }

    #[test]
    fn test_render_text_marks_current_step() {
        let mut controller = GameController::new();
        controller.apply_move(Position::Center);
        let text = derive_view(&controller).render_text();
        assert!(text.contains("Next player: O"));
        assert!(text.contains("> 1. Go to move #1 (2, 2)"));
        assert!(text.contains("  0. Go to game start"));
    }
}
