//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side of the game a mark belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// The human player (always moves first).
    #[display("Player")]
    Player,
    /// The minimax opponent.
    #[display("Computer")]
    Computer,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Player => Mark::Computer,
            Mark::Computer => Mark::Player,
        }
    }

    /// Symbol used by the board notation.
    pub fn notation(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Computer => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// Errors produced while parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum NotationError {
    /// Notation did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character that is neither a mark nor an empty marker.
    #[display("Unrecognized cell symbol {:?}", _0)]
    UnknownSymbol(char),
}

impl std::error::Error for NotationError {}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed as `cells[row][col]`.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Parses a board from notation.
    ///
    /// Nine symbols in row-major order: `X` for the player, `O` for the
    /// computer, and `.`, `-` or `_` for an empty cell. Whitespace and `|`
    /// separators are ignored, so the output of `Display` parses back.
    #[instrument]
    pub fn from_notation(notation: &str) -> Result<Self, NotationError> {
        let symbols: Vec<char> = notation
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();

        if symbols.len() != 9 {
            return Err(NotationError::WrongLength(symbols.len()));
        }

        let mut board = Self::new();
        for (position, symbol) in Position::ALL.into_iter().zip(symbols) {
            let cell = match symbol.to_ascii_uppercase() {
                'X' => Cell::Occupied(Mark::Player),
                'O' => Cell::Occupied(Mark::Computer),
                '.' | '-' | '_' => Cell::Empty,
                other => return Err(NotationError::UnknownSymbol(other)),
            };
            board.set(position, cell);
        }

        Ok(board)
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Gets the cell at a raw coordinate, `None` outside the grid.
    pub fn get_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Places a mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CellOccupied`] and leaves the board untouched if
    /// the cell already holds a mark.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        self.set(pos, Cell::Occupied(mark));
        Ok(())
    }

    /// Resets a cell to empty. Only the speculative search retracts marks.
    pub(crate) fn clear(&mut self, pos: Position) {
        self.set(pos, Cell::Empty);
    }

    /// Overwrites a cell without checking occupancy.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Checks if the board has no empty cell left.
    pub fn is_full(&self) -> bool {
        super::rules::is_full(self)
    }

    /// Checks whether any row, column or diagonal is entirely `mark`.
    pub fn has_line(&self, mark: Mark) -> bool {
        super::rules::has_line(self, mark)
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Number of cells holding either mark.
    pub fn occupied(&self) -> usize {
        self.count(Mark::Player) + self.count(Mark::Computer)
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Returns the grid rows.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Copies the grid into a read-only snapshot for rendering.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot { cells: self.cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(mark) => mark.notation(),
                };
                write!(f, "{}", symbol)?;
            }
            if i < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Read-only copy of the board handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot {
    cells: [[Cell; 3]; 3],
}

impl BoardSnapshot {
    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Returns the grid rows.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }
}

impl From<BoardSnapshot> for Board {
    fn from(snapshot: BoardSnapshot) -> Self {
        Self {
            cells: snapshot.cells,
        }
    }
}
