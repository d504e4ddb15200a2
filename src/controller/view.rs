//! Render snapshot handed to the presentation layer.

use crate::core::Board;
use crate::presenter::{DisplayRow, SortOrder, Status};
use serde::Serialize;

/// Derived state for one frame. Built fresh by
/// [`GameController::view`](super::GameController::view).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Board at the current history step.
    pub board: Board,
    /// Cells to highlight when the shown board is won.
    pub winning_line: Option<[usize; 3]>,
    /// Status line for the shown board.
    pub status: Status,
    /// Move log in display order.
    pub moves: Vec<DisplayRow>,
    /// Order the move log is shown in.
    pub sort: SortOrder,
    /// Text and tooltip for the sort control.
    pub sort_label: &'static str,
    pub sort_hint: &'static str,
    /// Whether the reset control is active.
    pub reset_enabled: bool,
}

impl GameView {
    /// Whether `cell` is part of the winning line.
    pub fn is_highlighted(&self, cell: usize) -> bool {
        self.winning_line
            .map(|line| line.contains(&cell))
            .unwrap_or(false)
    }
}
