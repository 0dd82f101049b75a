//! Move engine: turn sequencing, terminal detection and the computer's reply.
//!
//! The engine owns the board and whose turn it is. The presentation layer
//! calls [`Engine::submit_player_move`] with the chosen cell; the engine
//! applies it, answers with the computer's move when the game continues, and
//! reports the resulting state together with a snapshot for rendering.

use super::action::{Move, MoveError};
use super::contracts::{Contract, LegalMove, MoveContract};
use super::minimax;
use super::phases::GameState;
use super::rules;
use super::{Board, BoardSnapshot, Mark, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// What happened during one call to [`Engine::submit_player_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveReport {
    /// State after the last half-move.
    state: GameState,
    /// Board after the last half-move.
    board: BoardSnapshot,
    /// Where the player's mark went.
    player_move: Position,
    /// The computer's reply, if the player's move did not end the game.
    computer_move: Option<Position>,
}

/// A single game against the computer.
///
/// The player always moves first. After every accepted player move the
/// computer replies before control returns, so between calls it is always
/// the player's turn unless the game has ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    pub(super) board: Board,
    pub(super) to_move: Mark,
    pub(super) history: Vec<Move>,
}

impl Engine {
    /// Starts a fresh game: empty board, player to move.
    #[instrument]
    pub fn new_game() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::Player,
            history: Vec::new(),
        }
    }

    /// Rebuilds a game from recorded moves of both sides.
    ///
    /// Each move must be legal when it is applied: game still running, the
    /// right side to move, the cell empty. The computer's moves are taken as
    /// given, not searched.
    ///
    /// # Errors
    ///
    /// Returns the first precondition failure.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut engine = Self::new_game();
        for action in moves {
            LegalMove::check(action, &engine)?;
            engine.apply(*action)?;
        }
        Ok(engine)
    }

    /// Discards this game and starts a new one.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn restart(self) -> Self {
        Self::new_game()
    }

    /// Submits the player's move by raw coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for a coordinate outside the grid,
    /// plus every error of [`Engine::submit`].
    #[instrument(skip(self))]
    pub fn submit_player_move(&mut self, row: usize, col: usize) -> Result<MoveReport, MoveError> {
        let position = Position::from_row_col(row, col).ok_or_else(|| {
            warn!(row, col, "Rejected move outside the board");
            MoveError::OutOfBounds { row, col }
        })?;
        self.submit(position)
    }

    /// Submits the player's move at `position`.
    ///
    /// Places the player's mark; if the game continues, the computer replies
    /// immediately. Returns the state after the last half-move.
    ///
    /// # Errors
    ///
    /// Rejections leave the engine untouched:
    /// - [`MoveError::GameOver`] if the game has already ended
    /// - [`MoveError::NotYourTurn`] if the computer is to move
    /// - [`MoveError::CellOccupied`] if the cell holds a mark
    ///
    /// [`MoveError::InvariantViolation`] signals an engine fault and is not a
    /// rejection.
    #[instrument(skip(self))]
    pub fn submit(&mut self, position: Position) -> Result<MoveReport, MoveError> {
        let action = Move::new(Mark::Player, position);
        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(error = %e, "Rejected player move");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();
        let state = self.apply(action)?;

        let computer_move = if state.is_terminal() {
            None
        } else {
            Some(self.computer_move()?)
        };

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)
            .inspect_err(|e| error!(error = %e, "Postcondition failed"))?;

        let state = self.state();
        if state.is_terminal() {
            info!(%state, moves = self.history.len(), "Game over");
        }

        Ok(MoveReport {
            state,
            board: self.board.snapshot(),
            player_move: position,
            computer_move,
        })
    }

    /// Chooses and plays the computer's reply.
    fn computer_move(&mut self) -> Result<Position, MoveError> {
        if self.to_move != Mark::Computer {
            return Err(MoveError::InvariantViolation(
                "computer asked to move out of turn".to_string(),
            ));
        }

        let best = minimax::find_best_move(&mut self.board)
            .inspect_err(|e| error!(error = %e, "Search failed"))?;
        debug!(position = %best.position, score = best.score, "Computer replies");

        self.apply(Move::new(Mark::Computer, best.position))?;
        Ok(best.position)
    }

    /// Places a mark, records it and hands the turn over.
    fn apply(&mut self, action: Move) -> Result<GameState, MoveError> {
        self.board.place(action.position, action.mark)?;
        self.history.push(action);
        self.to_move = action.mark.opponent();

        let state = rules::evaluate(&self.board, action.mark);
        debug!(%action, %state, "Applied move");
        Ok(state)
    }

    /// Current state, derived from the board.
    pub fn state(&self) -> GameState {
        rules::assess(&self.board)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copies the board for rendering.
    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns true if the player may move now.
    pub fn is_player_turn(&self) -> bool {
        self.to_move == Mark::Player && !self.state().is_terminal()
    }

    /// Returns move history, both sides interleaved.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Empty cells, or none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.state().is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new_game()
    }
}
