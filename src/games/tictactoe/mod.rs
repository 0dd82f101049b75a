//! Tic-tac-toe against a minimax opponent.
//!
//! Layers, bottom up:
//! - board storage and cell queries ([`Board`])
//! - [`rules`]: line, draw and terminal-state evaluation
//! - [`minimax`]: exhaustive search for the computer's move
//! - turn sequencing behind a single move entry point ([`Engine`])

mod action;
mod contracts;
mod engine;
mod invariants;
mod phases;
mod position;
mod types;

pub mod minimax;
pub mod rules;

pub use action::{Move, MoveError};
pub use contracts::{CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract, MoversTurn};
pub use engine::{Engine, MoveReport};
pub use invariants::{
    AlternatingTurnInvariant, EngineInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant, SingleWinnerInvariant,
};
pub use minimax::{ScoredMove, find_best_move, score_moves};
pub use phases::GameState;
pub use position::Position;
pub use types::{Board, BoardSnapshot, Cell, Mark, NotationError};
