//! Board representation: marks, cells and the 3x3 grid.
//!
//! Boards are small `Copy` values. Every history entry owns its own
//! snapshot, so no two entries ever alias the same grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Width (and height) of the board.
pub const BOARD_SIDE: usize = 3;

/// Mark placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// First player's mark.
    X,
    /// Second player's mark.
    O,
}

impl Mark {
    /// Mark whose turn it is at the given history index.
    ///
    /// X plays on even indices, O on odd ones.
    pub fn for_turn(index: usize) -> Self {
        if index % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Single-character symbol for the mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Marked(Mark),
}

impl Cell {
    /// Check whether the cell is still free.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Mark held by the cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// Immutable 3x3 grid stored in row-major order (`index = row * 3 + col`).
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::{Board, Cell, Mark};
///
/// let board = Board::new().with(4, Mark::X);
/// assert_eq!(board.get(4), Some(Cell::Marked(Mark::X)));
/// assert_eq!(board.get(9), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Cell at `index`, or `None` when the index is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Check whether `index` is on the board and still empty.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Return a copy of this board with `mark` placed at `index`.
    ///
    /// The receiver is left untouched. Indices off the board return an
    /// unchanged copy; callers validate the index first.
    pub fn with(&self, index: usize, mark: Mark) -> Self {
        let mut next = *self;
        if let Some(cell) = next.cells.get_mut(index) {
            *cell = Cell::Marked(mark);
        }
        next
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Check whether every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIDE {
            for col in 0..BOARD_SIDE {
                let index = row * BOARD_SIDE + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Marked(mark) => write!(f, "{mark}")?,
                }
                if col < BOARD_SIDE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < BOARD_SIDE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// 1-based `(row, col)` coordinates of a cell index.
pub fn coordinates(index: usize) -> (usize, usize) {
    (index / BOARD_SIDE + 1, index % BOARD_SIDE + 1)
}
