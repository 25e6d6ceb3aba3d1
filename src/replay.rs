//! Scripted, non-interactive play.

use crate::games::tictactoe::{Action, GameController, HistoryError};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// An action in a replay script could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Action #{} ({}) failed: {}", index, action, source)]
pub struct ReplayError {
    /// Zero-based position of the action in the script.
    pub index: usize,
    /// The failing action.
    pub action: Action,
    /// Underlying controller error.
    pub source: HistoryError,
}

/// Applies `actions` in order to a fresh controller.
///
/// Ignored moves are not failures; only out-of-range jumps stop the replay.
#[instrument(skip(actions), fields(count = actions.len()))]
pub fn replay(actions: &[Action]) -> Result<GameController, ReplayError> {
    let mut controller = GameController::new();

    for (index, &action) in actions.iter().enumerate() {
        let outcome = action
            .apply(&mut controller)
            .map_err(|source| ReplayError { index, action, source })?;
        debug!(index, %action, ?outcome, "Replayed action");
    }

    info!(
        steps = controller.history().len(),
        current = controller.current_step(),
        "Replay finished"
    );
    Ok(controller)
}
