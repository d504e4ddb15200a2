//! Pure derivations for the presentation layer.
//!
//! Everything here is recomputed from the history, the sort order and the
//! player names. Nothing is cached.

mod move_log;
mod status;

pub use move_log::{render, DisplayRow, SortOrder};
pub use status::{status, status_text, PlayerNames, Status, StatusTone};
