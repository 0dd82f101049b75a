//! History consistency invariant: history length matches occupied cells.

use super::super::Engine;
use super::Invariant;

/// Invariant: History length equals number of occupied cells.
///
/// Every recorded move corresponds to exactly one mark on the board, so the
/// number of marks equals the number of turns taken.
pub struct HistoryConsistentInvariant;

impl Invariant<Engine> for HistoryConsistentInvariant {
    fn holds(engine: &Engine) -> bool {
        engine.history().len() == engine.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
