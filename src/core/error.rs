//! Errors raised by history operations.

use thiserror::Error;

/// Reasons a move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("Cell {cell} is off the board (must be 0-8)")]
    OutOfBounds { cell: usize },

    #[error("Cell {cell} is already occupied")]
    CellOccupied { cell: usize },

    #[error("Game is already decided")]
    GameOver,
}

/// Jump target outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("History index {index} out of range (history has {len} entries)")]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}
