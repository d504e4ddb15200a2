//! Core game types and logic.
//!
//! This module contains the pure game core:
//! - Board snapshots and marks
//! - Win/draw evaluation
//! - The branching move history
//!
//! Nothing here performs I/O. Every derived value is recomputed from the
//! history on demand.

mod board;
mod error;
mod history;
mod outcome;

pub use board::{coordinates, Board, Cell, Mark, BOARD_SIDE, CELL_COUNT};
pub use error::{InvalidMove, OutOfRange};
pub use history::{History, HistoryEntry};
pub use outcome::{evaluate, Outcome, WINNING_LINES};
