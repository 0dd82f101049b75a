//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record who placed a mark
//! where, and can be validated independently of execution.

use super::phases::GameState;
use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: one side placing its mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub mark: Mark,
    /// The position where the mark is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Returns the side making this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant except [`MoveError::InvariantViolation`] is a rejection:
/// the engine state is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The coordinate lies outside the 3x3 grid.
    #[display("Cell ({}, {}) is outside the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// It is not the player's turn.
    #[display("It's not the player's turn")]
    NotYourTurn,

    /// The game has already ended.
    #[display("Game is already over: {}", _0)]
    GameOver(GameState),

    /// The engine broke one of its own guarantees.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl MoveError {
    /// True for ordinary rejected input, false for engine faults.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, MoveError::InvariantViolation(_))
    }
}

impl std::error::Error for MoveError {}
