//! Strictly Tic-Tac-Toe - a tic-tac-toe engine with an optimal opponent
//!
//! The player moves first; the computer answers every move with the reply
//! chosen by exhaustive minimax, so it never loses.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid storage and line queries
//! - **Rules**: win, draw and terminal-state evaluation
//! - **Minimax**: full-depth search for the computer's move
//! - **Engine**: turn sequencing behind one move entry point
//! - **Shell**: terminal presentation layer
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Engine, GameState, Position};
//!
//! let mut engine = Engine::new_game();
//! let report = engine.submit_player_move(0, 0).unwrap();
//!
//! assert_eq!(*report.state(), GameState::InProgress);
//! assert_eq!(*report.computer_move(), Some(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod shell;

// Crate-level exports - Configuration
pub use config::{ConfigError, ShellConfig};

// Crate-level exports - Shell
pub use shell::{Shell, Tally, render_board};

// Crate-level exports - Game types
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, BoardSnapshot, Cell, CellIsEmpty, Contract, Engine,
    EngineInvariants, GameNotOver, GameState, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, LegalMove, Mark, MonotonicBoardInvariant, Move,
    MoveContract, MoveError, MoveReport, MoversTurn, NotationError, Position, ScoredMove,
    SingleWinnerInvariant, find_best_move, score_moves,
};

// Crate-level exports - Rules and search internals
pub use games::tictactoe::{minimax, rules};
