//! First-class controller actions.
//!
//! Actions are what a renderer forwards to the controller: a square
//! click, a move list click, or the order toggle. The `replay` command
//! parses them from text.

use super::controller::{GameController, HistoryError, MoveOutcome};
use super::Position;
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::instrument;

/// One user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Mark a square for the player to move.
    Play(Position),
    /// Jump to a history step.
    Jump(usize),
    /// Toggle the move list order.
    Toggle,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(pos) => write!(f, "m{}", pos.to_index()),
            Action::Jump(step) => write!(f, "j{}", step),
            Action::Toggle => write!(f, "t"),
        }
    }
}

impl Action {
    /// Applies the action to the controller.
    ///
    /// Returns the move outcome for [`Action::Play`], `None` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] for a jump past the end of
    /// the history.
    #[instrument(skip(controller))]
    pub fn apply(
        self,
        controller: &mut GameController,
    ) -> Result<Option<MoveOutcome>, HistoryError> {
        match self {
            Action::Play(pos) => Ok(Some(controller.apply_move(pos))),
            Action::Jump(step) => controller.jump_to(step).map(|()| None),
            Action::Toggle => {
                controller.toggle_order();
                Ok(None)
            }
        }
    }
}

/// Error parsing an [`Action`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid action '{}': {}", input, reason)]
pub struct ActionParseError {
    /// The text that failed to parse.
    pub input: String,
    /// Why it failed.
    pub reason: &'static str,
}

impl ActionParseError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

impl FromStr for Action {
    type Err = ActionParseError;

    /// Parses `m<square>`, `j<step>` or `t`.
    ///
    /// A square is an index 0-8 or a position label such as `center`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let kind = chars
            .next()
            .ok_or_else(|| ActionParseError::new(s, "empty action"))?;
        let rest = chars.as_str();

        match kind.to_ascii_lowercase() {
            'm' => Position::from_label_or_number(rest)
                .map(Action::Play)
                .ok_or_else(|| {
                    ActionParseError::new(s, "expected a square 0-8 or a position name")
                }),
            'j' => rest
                .parse::<usize>()
                .map(Action::Jump)
                .map_err(|_| ActionParseError::new(s, "expected a step number")),
            't' if rest.is_empty() => Ok(Action::Toggle),
            _ => Err(ActionParseError::new(s, "expected m<square>, j<step> or t")),
        }
    }
}
