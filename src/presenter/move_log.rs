//! Human-readable move log derived from the history.

use crate::core::HistoryEntry;
use serde::{Deserialize, Serialize};

/// Display order of the move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// The opposite order.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Text for the control that switches away from this order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort Moves in Descending ⬆",
            Self::Descending => "Sort Moves in Ascending ⬇",
        }
    }

    /// Tooltip for the sort control.
    pub fn toggle_hint(self) -> &'static str {
        match self {
            Self::Ascending => "Sort moves to show latest first",
            Self::Descending => "Sort moves to show oldest first",
        }
    }
}

/// One line of the move log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    /// History index this row stands for.
    pub step: usize,
    /// Text shown for the row.
    pub label: String,
    /// Whether clicking the row jumps to `step`. The current row is inert.
    pub clickable: bool,
}

/// Build the move log for `entries` with `current_index` highlighted.
///
/// Rows are produced oldest first and reversed for `SortOrder::Descending`.
/// The inputs are only read.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::History;
/// use tictactoe_timeline::presenter::{render, SortOrder};
///
/// let mut history = History::new();
/// history.apply_move(4).unwrap();
///
/// let rows = render(history.entries(), history.current_index(), SortOrder::Ascending);
/// assert_eq!(rows[0].label, "Go to game start");
/// assert_eq!(rows[1].label, "You are at move #1 (2, 2)");
/// assert!(!rows[1].clickable);
/// ```
pub fn render(entries: &[HistoryEntry], current_index: usize, order: SortOrder) -> Vec<DisplayRow> {
    let mut rows: Vec<DisplayRow> = entries
        .iter()
        .enumerate()
        .map(|(step, entry)| {
            let is_current = step == current_index;
            DisplayRow {
                step,
                label: label_for(step, entry, is_current),
                clickable: !is_current,
            }
        })
        .collect();

    if order == SortOrder::Descending {
        rows.reverse();
    }
    rows
}

fn label_for(step: usize, entry: &HistoryEntry, is_current: bool) -> String {
    match entry.move_coordinates() {
        Some((row, col)) if step > 0 => {
            if is_current {
                format!("You are at move #{step} ({row}, {col})")
            } else {
                format!("Go to move #{step} ({row}, {col})")
            }
        }
        _ if is_current => "You are at game start".to_string(),
        _ => "Go to game start".to_string(),
    }
}
