//! Branching move history.
//!
//! The history is an ordered sequence of board snapshots plus a pointer to
//! the snapshot currently shown. Jumping moves the pointer only; playing a
//! move from an earlier snapshot truncates everything after the pointer
//! before recording the new snapshot.

use super::board::{coordinates, Board, Mark, CELL_COUNT};
use super::error::{InvalidMove, OutOfRange};
use super::outcome::{evaluate, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One snapshot in the history.
///
/// Entries are immutable values: the board after a move and the cell that
/// move filled. The initial entry has no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move was played.
    pub board: Board,
    /// Cell filled to produce `board`; `None` for the initial entry.
    pub last_move: Option<usize>,
}

impl HistoryEntry {
    /// The empty starting entry.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// 1-based `(row, col)` of the move that produced this entry.
    pub fn move_coordinates(&self) -> Option<(usize, usize)> {
        self.last_move.map(coordinates)
    }
}

impl Default for HistoryEntry {
    fn default() -> Self {
        Self::initial()
    }
}

/// Ordered game history with a movable "current" pointer.
///
/// The history is never empty and the pointer always lands on a recorded
/// entry. The mark to play is derived from the pointer's parity rather than
/// stored.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::{History, Mark};
///
/// let mut history = History::new();
/// history.apply_move(4).unwrap();
/// history.apply_move(0).unwrap();
/// history.apply_move(8).unwrap();
/// assert_eq!(history.len(), 4);
///
/// // Go back and play differently: the old future is discarded.
/// history.jump_to(1).unwrap();
/// assert_eq!(history.next_mark(), Mark::O);
/// history.apply_move(2).unwrap();
///
/// assert_eq!(history.len(), 3);
/// assert_eq!(history.current_index(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
    current: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
            current: 0,
        }
    }

    /// Play the next mark at `cell` from the current entry.
    ///
    /// Any entries after the current one are discarded before the new entry
    /// is appended. On error nothing changes.
    ///
    /// # Errors
    ///
    /// - `InvalidMove::OutOfBounds` if `cell` is not in `0..9`
    /// - `InvalidMove::GameOver` if the current board is already decided
    /// - `InvalidMove::CellOccupied` if the cell already holds a mark
    #[instrument(skip(self), fields(current = self.current, len = self.entries.len()))]
    pub fn apply_move(&mut self, cell: usize) -> Result<(), InvalidMove> {
        if cell >= CELL_COUNT {
            return Err(InvalidMove::OutOfBounds { cell });
        }

        let board = self.current().board;
        if evaluate(&board).is_final() {
            return Err(InvalidMove::GameOver);
        }
        if !board.is_empty_at(cell) {
            return Err(InvalidMove::CellOccupied { cell });
        }

        let mark = self.next_mark();
        if !self.is_at_tail() {
            let discarded = self.entries.len() - (self.current + 1);
            debug!(discarded, "truncating future branch");
            self.entries.truncate(self.current + 1);
        }
        self.entries.push(HistoryEntry {
            board: board.with(cell, mark),
            last_move: Some(cell),
        });
        self.current = self.entries.len() - 1;

        debug!(
            %mark,
            cell,
            step = self.current,
            outcome = self.outcome().name(),
            "move recorded"
        );
        Ok(())
    }

    /// Move the current pointer to `index` without touching any entry.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index` is not a recorded entry.
    #[instrument(skip(self), fields(current = self.current, len = self.entries.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), OutOfRange> {
        if index >= self.entries.len() {
            return Err(OutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.current = index;
        debug!(step = index, "jumped");
        Ok(())
    }

    /// Discard everything and return to the empty starting board.
    #[instrument(skip(self), fields(current = self.current, len = self.entries.len()))]
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.push(HistoryEntry::initial());
        self.current = 0;
        debug!("history reset");
    }

    /// Entry the pointer is on.
    pub fn current(&self) -> &HistoryEntry {
        // `current < entries.len()` and the history is never empty.
        &self.entries[self.current]
    }

    /// Index of the current entry.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of recorded entries (always at least one).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: the starting entry cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mark that the next move places.
    pub fn next_mark(&self) -> Mark {
        Mark::for_turn(self.current)
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.current().board)
    }

    /// Check if the pointer is on the newest entry.
    pub fn is_at_tail(&self) -> bool {
        self.current + 1 == self.entries.len()
    }

    /// Check if nothing has been played since the last reset.
    pub fn is_at_start(&self) -> bool {
        self.current == 0 && self.entries.len() == 1
    }
}
