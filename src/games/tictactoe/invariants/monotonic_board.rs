//! Monotonic board invariant: cells never change once set.

use super::super::{Board, Cell, Engine};
use super::Invariant;

/// Invariant: The board is exactly the replay of the move history.
///
/// Replaying onto an empty board must never hit an occupied cell, and the
/// result must match the live board.
pub struct MonotonicBoardInvariant;

impl Invariant<Engine> for MonotonicBoardInvariant {
    fn holds(engine: &Engine) -> bool {
        let mut reconstructed = Board::new();

        for mov in engine.history() {
            if reconstructed.get(mov.position) != Cell::Empty {
                return false;
            }
            reconstructed.set(mov.position, Cell::Occupied(mov.mark));
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Move, Position};

    #[test]
    fn test_new_game_holds() {
        let engine = Engine::new_game();
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut engine = Engine::new_game();
        engine.submit(Position::Center).unwrap();
        engine.submit(Position::BottomCenter).unwrap();
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut engine = Engine::new_game();
        engine.submit(Position::Center).unwrap();
        engine.board.set(Position::Center, Cell::Occupied(Mark::Computer));
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_repeated_position_in_history_violates() {
        let mut engine = Engine::new_game();
        engine.history = vec![
            Move::new(Mark::Player, Position::Center),
            Move::new(Mark::Computer, Position::Center),
        ];
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }
}
