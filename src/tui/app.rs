//! Application state and key handling.

use crate::games::tictactoe::{GameController, Position, ViewModel, derive_view};
use crossterm::event::KeyCode;
use tracing::{debug, instrument, warn};

use super::input::{digit_square, move_cursor};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move the move list selection.
    Moves,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: GameController,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            controller: GameController::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
            should_quit: false,
        }
    }

    /// Gets the game controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Derives the view to draw this frame.
    pub fn view(&self) -> ViewModel {
        derive_view(&self.controller)
    }

    /// Square under the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel receiving arrow keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted move list row.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('t' | 'T') => {
                self.controller.toggle_order();
                self.clamp_selection();
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                if self.focus == Focus::Moves {
                    self.selected_step = self.controller.current_step();
                }
            }
            code => {
                if let Some(pos) = digit_square(code) {
                    self.play(pos);
                    return;
                }
                match self.focus {
                    Focus::Board => self.handle_board_key(code),
                    Focus::Moves => self.handle_moves_key(code),
                }
            }
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        let last = self.controller.history().len() - 1;
        match key {
            KeyCode::Up => self.selected_step = self.selected_step.saturating_sub(1),
            KeyCode::Down => self.selected_step = (self.selected_step + 1).min(last),
            KeyCode::Home => self.selected_step = 0,
            KeyCode::End => self.selected_step = last,
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Err(e) = self.controller.jump_to(self.selected_step) {
                    warn!(error = %e, "Move list selection out of range");
                }
            }
            _ => {}
        }
    }

    fn play(&mut self, pos: Position) {
        let outcome = self.controller.apply_move(pos);
        debug!(?outcome, square = %pos, "Square clicked");
        self.selected_step = self.controller.current_step();
    }

    fn clamp_selection(&mut self) {
        let last = self.controller.history().len() - 1;
        self.selected_step = self.selected_step.min(last);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
