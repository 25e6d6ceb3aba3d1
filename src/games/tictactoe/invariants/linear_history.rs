//! Linear history invariant: each snapshot adds one alternating mark.

use super::super::{GameController, Player, Position, Square};
use super::Invariant;

/// Invariant: in storage order, the first snapshot is the empty board and
/// each later snapshot differs from its predecessor by exactly one
/// previously-empty square, marked by X on odd steps and O on even steps.
///
/// Toggling the order reverses storage, so this only holds for a
/// controller whose order was never toggled (or was toggled back before
/// any further move).
pub struct LinearHistory;

impl Invariant<GameController> for LinearHistory {
    fn holds(controller: &GameController) -> bool {
        let history = &controller.history;

        let starts_empty = history
            .first()
            .is_some_and(|s| s.is_origin() && s.board().occupied_count() == 0);
        if !starts_empty {
            return false;
        }

        history.windows(2).enumerate().all(|(step, pair)| {
            let (prev, next) = (&pair[0], &pair[1]);
            let Some(played) = next.position() else {
                return false;
            };
            let mark = Square::Occupied(Player::for_step(step));

            prev.board().is_empty(played)
                && next.board().get(played) == mark
                && Position::ALL
                    .iter()
                    .filter(|&&pos| pos != played)
                    .all(|&pos| prev.board().get(pos) == next.board().get(pos))
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one alternating mark to its predecessor"
    }
}
