//! Win and draw detection.
//!
//! `evaluate` is a pure function of a board. It can be called on any board,
//! including snapshots that are not part of the live history.

use super::board::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};

/// The eight winning lines, in the order they are checked.
///
/// Rows first, then columns, then the two diagonals. When more than one
/// line is complete the first one in this order is reported.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Result of evaluating a board.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::{evaluate, Board, Mark, Outcome};
///
/// let board = Board::new()
///     .with(0, Mark::X)
///     .with(3, Mark::X)
///     .with(6, Mark::X);
///
/// assert_eq!(
///     evaluate(&board),
///     Outcome::Win { mark: Mark::X, line: [0, 3, 6] }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line complete and at least one empty cell.
    InProgress,
    /// `mark` holds all three cells of `line`.
    Win { mark: Mark, line: [usize; 3] },
    /// Board is full with no complete line.
    Draw,
}

impl Outcome {
    /// Name of the outcome for display and logging.
    pub fn name(&self) -> &str {
        match self {
            Self::InProgress => "InProgress",
            Self::Win { .. } => "Win",
            Self::Draw => "Draw",
        }
    }

    /// Check if the game is decided and accepts no further moves.
    pub fn is_final(&self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Self::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Winning line, if any.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self {
            Self::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Evaluate a board for a win, a draw, or a game still in progress.
pub fn evaluate(board: &Board) -> Outcome {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        if let Some(Cell::Marked(mark)) = board.get(a) {
            if board.get(b) == Some(Cell::Marked(mark))
                && board.get(c) == Some(Cell::Marked(mark))
            {
                return Outcome::Win { mark, line };
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
