//! Game state as seen by the caller.
//!
//! The state is never stored. It is recomputed from the board whenever it is
//! needed, so it cannot drift from the marks actually placed.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Where the game stands after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameState {
    /// No line and at least one empty cell.
    #[display("Game in progress")]
    InProgress,
    /// The player completed a line.
    #[display("Player wins!")]
    PlayerWins,
    /// The computer completed a line.
    #[display("Computer wins!")]
    ComputerWins,
    /// Full board, no line.
    #[display("It's a draw!")]
    Draw,
}

impl GameState {
    /// The state in which `mark` has won.
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::Player => GameState::PlayerWins,
            Mark::Computer => GameState::ComputerWins,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameState::PlayerWins => Some(Mark::Player),
            GameState::ComputerWins => Some(Mark::Computer),
            GameState::InProgress | GameState::Draw => None,
        }
    }

    /// Returns true once the game has concluded.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameState::Draw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner() {
        assert_eq!(GameState::won_by(Mark::Player).winner(), Some(Mark::Player));
        assert_eq!(GameState::won_by(Mark::Computer).winner(), Some(Mark::Computer));
        assert_eq!(GameState::Draw.winner(), None);
        assert_eq!(GameState::InProgress.winner(), None);
    }

    #[test]
    fn test_terminal() {
        assert!(!GameState::InProgress.is_terminal());
        assert!(GameState::PlayerWins.is_terminal());
        assert!(GameState::ComputerWins.is_terminal());
        assert!(GameState::Draw.is_terminal());
    }

    #[test]
    fn test_announcements() {
        assert_eq!(GameState::PlayerWins.to_string(), "Player wins!");
        assert_eq!(GameState::ComputerWins.to_string(), "Computer wins!");
        assert_eq!(GameState::Draw.to_string(), "It's a draw!");
    }
}
