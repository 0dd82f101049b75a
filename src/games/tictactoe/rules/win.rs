//! Line detection for tic-tac-toe.

use super::super::{Board, Cell, Mark, Position};

/// The 8 lines that win the game when uniformly marked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `mark` fills any row, column or diagonal.
///
/// All 8 lines are checked regardless of which cell changed last; the search
/// evaluates whole boards, not single moves.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    let target = Cell::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == target))
}

/// Returns the mark holding a complete line, checking the player first.
pub fn check_winner(board: &Board) -> Option<Mark> {
    [Mark::Player, Mark::Computer]
        .into_iter()
        .find(|mark| has_line(board, *mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Mark, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.place(*pos, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_no_line_empty_board() {
        let board = Board::new();
        assert!(!has_line(&board, Mark::Player));
        assert!(!has_line(&board, Mark::Computer));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            let board = board_with(Mark::Computer, &line);
            assert!(has_line(&board, Mark::Computer), "line {:?} missed", line);
            assert!(!has_line(&board, Mark::Player));
            assert_eq!(check_winner(&board), Some(Mark::Computer));
        }
    }

    #[test]
    fn test_anti_diagonal() {
        let board = board_with(
            Mark::Player,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        assert!(has_line(&board, Mark::Player));
    }

    #[test]
    fn test_incomplete_line() {
        let board = board_with(Mark::Player, &[Position::TopLeft, Position::TopCenter]);
        assert!(!has_line(&board, Mark::Player));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Mark::Player, &[Position::TopLeft, Position::TopCenter]);
        board.place(Position::TopRight, Mark::Computer).unwrap();
        assert!(!has_line(&board, Mark::Player));
        assert!(!has_line(&board, Mark::Computer));
    }
}
