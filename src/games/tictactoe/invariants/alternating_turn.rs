//! Alternating turn invariant: player, computer, player, ...

use super::super::{Engine, Mark};
use super::Invariant;

/// Invariant: Sides alternate and the turn follows the mark counts.
///
/// The player always opens, so it is the player's turn exactly when both
/// sides have placed the same number of marks.
pub struct AlternatingTurnInvariant;

impl Invariant<Engine> for AlternatingTurnInvariant {
    fn holds(engine: &Engine) -> bool {
        let history = engine.history();

        if let Some(first) = history.first() {
            if first.mark != Mark::Player {
                return false;
            }
        }

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        let board = engine.board();
        let balanced = board.count(Mark::Player) == board.count(Mark::Computer);
        (engine.to_move() == Mark::Player) == balanced
    }

    fn description() -> &'static str {
        "Sides alternate and it is the player's turn iff mark counts are equal"
    }
}
