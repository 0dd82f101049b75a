//! Contract-based validation for player moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`. Preconditions run on every move and turn bad input into
//! a rejection; postconditions verify the engine invariants after a move.

use super::action::{Move, MoveError};
use super::engine::Engine;
use super::invariants::{EngineInvariants, InvariantSet};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must not have ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once the game has ended.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &Engine) -> Result<(), MoveError> {
        let state = engine.state();
        if state.is_terminal() {
            Err(MoveError::GameOver(state))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the mover's turn.
pub struct MoversTurn;

impl MoversTurn {
    /// Rejects a move by the side not on turn.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &Engine) -> Result<(), MoveError> {
        if mov.mark != engine.to_move() {
            Err(MoveError::NotYourTurn)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The cell at the move's position must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects a move onto a marked cell.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &Engine) -> Result<(), MoveError> {
        if !engine.board().is_empty(mov.position) {
            Err(MoveError::CellOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition, checked in order: game running, mover's turn,
/// cell empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &Engine) -> Result<(), MoveError> {
        GameNotOver::check(mov, engine)?;
        MoversTurn::check(mov, engine)?;
        CellIsEmpty::check(mov, engine)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for a player move and the computer's reply.
///
/// Preconditions:
/// - Game not over
/// - Player's turn
/// - Cell empty
///
/// Postconditions:
/// - Turn parity matches the mark counts
/// - History matches the occupied cells
/// - Board is the replay of the history
/// - At most one side holds a line
/// - The board only gained marks
pub struct MoveContract;

impl Contract<Engine, Move> for MoveContract {
    fn pre(engine: &Engine, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, engine)
    }

    fn post(before: &Engine, after: &Engine) -> Result<(), MoveError> {
        let grew = after.board().occupied() > before.board().occupied()
            && before
                .history()
                .iter()
                .all(|mov| after.board().get(mov.position) == before.board().get(mov.position));
        if !grew {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move did not extend the board".to_string(),
            ));
        }

        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
