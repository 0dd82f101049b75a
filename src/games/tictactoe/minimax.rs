//! Exhaustive minimax search for the computer's reply.
//!
//! The computer maximizes, the player minimizes. A finished position scores
//! `WIN_SCORE - depth` for a computer win, `depth - WIN_SCORE` for a player
//! win and [`DRAW_SCORE`] for a draw, where `depth` counts plies from the real
//! board. Quick wins beat slow ones, and slow losses beat quick ones.
//!
//! The search explores one mutable board. Every speculative mark is held by a
//! [`Speculation`] guard that retracts it when dropped, so the board is
//! restored on every exit path.

use super::action::MoveError;
use super::rules;
use super::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Base score of a win, reduced by the plies needed to reach it.
pub const WIN_SCORE: i32 = 10;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// A candidate cell and its minimax value for the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredMove {
    /// The cell the computer would take.
    pub position: Position,
    /// Guaranteed outcome under optimal play by both sides.
    pub score: i32,
}

/// A mark placed for exploration only, retracted on drop.
struct Speculation<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> Speculation<'a> {
    /// Places `mark` on an empty cell.
    fn place(board: &'a mut Board, position: Position, mark: Mark) -> Self {
        debug_assert!(board.is_empty(position));
        board.set(position, Cell::Occupied(mark));
        Self { board, position }
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.clear(self.position);
    }
}

/// Scores the board for the side to move.
///
/// `maximizing` is true when the computer is to move. Lines are checked for
/// the player first, then the computer, then fullness.
pub fn minimax(board: &mut Board, depth: i32, maximizing: bool) -> i32 {
    if rules::has_line(board, Mark::Player) {
        return depth - WIN_SCORE;
    }
    if rules::has_line(board, Mark::Computer) {
        return WIN_SCORE - depth;
    }
    if rules::is_full(board) {
        return DRAW_SCORE;
    }

    let mark = if maximizing { Mark::Computer } else { Mark::Player };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for position in Position::ALL {
        if !board.is_empty(position) {
            continue;
        }
        let score = {
            let mut speculation = Speculation::place(board, position, mark);
            minimax(&mut speculation, depth + 1, !maximizing)
        };
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Scores every empty cell as the computer's next move, in row-major order.
///
/// # Errors
///
/// Returns [`MoveError::InvariantViolation`] if the game is already over or
/// no cell is empty.
#[instrument(skip(board), fields(occupied = board.occupied()))]
pub fn score_moves(board: &mut Board) -> Result<Vec<ScoredMove>, MoveError> {
    let state = rules::assess(board);
    if state.is_terminal() {
        return Err(MoveError::InvariantViolation(format!(
            "search invoked on a finished game ({})",
            state
        )));
    }

    let mut scored = Vec::new();
    for position in Position::ALL {
        if !board.is_empty(position) {
            continue;
        }
        let score = {
            let mut speculation = Speculation::place(board, position, Mark::Computer);
            minimax(&mut speculation, 0, false)
        };
        debug!(%position, score, "Scored candidate");
        scored.push(ScoredMove { position, score });
    }

    if scored.is_empty() {
        return Err(MoveError::InvariantViolation(
            "search invoked with no legal moves".to_string(),
        ));
    }

    Ok(scored)
}

/// Chooses the computer's move.
///
/// Picks the strictly highest score; among equal scores the first cell in
/// row-major order wins, so the choice is reproducible.
///
/// # Errors
///
/// Returns [`MoveError::InvariantViolation`] if the game is already over or
/// no cell is empty.
#[instrument(skip(board))]
pub fn find_best_move(board: &mut Board) -> Result<ScoredMove, MoveError> {
    let scored = score_moves(board)?;

    let mut best: Option<ScoredMove> = None;
    for candidate in scored {
        match best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(candidate),
        }
    }

    let best = best.ok_or_else(|| {
        MoveError::InvariantViolation("search produced no candidate".to_string())
    })?;
    debug!(position = %best.position, score = best.score, "Selected move");
    Ok(best)
}
