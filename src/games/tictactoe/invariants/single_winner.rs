//! Single winner invariant: both sides never hold a line at once.

use super::super::{Engine, Mark};
use super::Invariant;

/// Invariant: At most one side holds a complete line.
///
/// Play stops at the first line, so a second one for the other side cannot
/// appear through legal moves.
pub struct SingleWinnerInvariant;

impl Invariant<Engine> for SingleWinnerInvariant {
    fn holds(engine: &Engine) -> bool {
        let board = engine.board();
        !(board.has_line(Mark::Player) && board.has_line(Mark::Computer))
    }

    fn description() -> &'static str {
        "At most one side holds a complete line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Board;

    #[test]
    fn test_new_game_holds() {
        assert!(SingleWinnerInvariant::holds(&Engine::new_game()));
    }

    #[test]
    fn test_one_line_holds() {
        let mut engine = Engine::new_game();
        engine.board = Board::from_notation("XXX OO. ...").unwrap();
        assert!(SingleWinnerInvariant::holds(&engine));
    }

    #[test]
    fn test_two_lines_violate() {
        let mut engine = Engine::new_game();
        engine.board = Board::from_notation("XXX OOO ...").unwrap();
        assert!(!SingleWinnerInvariant::holds(&engine));
    }
}
