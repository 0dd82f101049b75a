//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board storage
//! so the engine, the search and the contracts all judge positions the same
//! way.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, has_line};

use super::{Board, GameState, Mark};

/// Terminal-state evaluation after `mover` placed a mark.
///
/// The mover wins if it now holds a line; otherwise a full board is a draw.
pub fn evaluate(board: &Board, mover: Mark) -> GameState {
    if has_line(board, mover) {
        GameState::won_by(mover)
    } else if is_full(board) {
        GameState::Draw
    } else {
        GameState::InProgress
    }
}

/// Derives the state of an arbitrary board without knowing the last mover.
///
/// Lines are checked player first, then computer, then fullness.
pub fn assess(board: &Board) -> GameState {
    match check_winner(board) {
        Some(mark) => GameState::won_by(mark),
        None if is_full(board) => GameState::Draw,
        None => GameState::InProgress,
    }
}
