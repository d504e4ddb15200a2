//! Tictactoe Timeline: a pure tic-tac-toe core with branching history
//!
//! The crate follows a "pure core, imperative shell" layout. The game rules,
//! the history timeline and every display derivation are pure functions
//! over owned values. A single controller owns the mutable session state and
//! turns raw user intents into history updates.
//!
//! # Core Concepts
//!
//! - **Board**: immutable 3x3 snapshot, copied into every history entry
//! - **Outcome**: win/draw/in-progress evaluation of any board
//! - **History**: ordered snapshots plus a movable pointer; playing from an
//!   earlier point discards the old future
//! - **Presenter**: move log rows and status line derived on demand
//! - **Controller**: intent handlers and a one-call render snapshot
//!
//! # Example
//!
//! ```rust
//! use tictactoe_timeline::controller::GameController;
//! use tictactoe_timeline::core::Mark;
//!
//! let mut game = GameController::new();
//! game.on_player_name_change(Mark::X, "Ada");
//!
//! for cell in [0, 1, 3, 4, 6] {
//!     game.on_cell_click(cell);
//! }
//! assert_eq!(game.status().to_string(), "Winner: Ada");
//!
//! // Travel back and take a different branch.
//! game.on_history_row_click(2);
//! game.on_cell_click(8);
//! assert_eq!(game.history().len(), 4);
//! assert_eq!(game.status().to_string(), "Next player: Player 2");
//! ```

pub mod config;
pub mod controller;
pub mod core;
pub mod presenter;

// Re-export commonly used types
pub use crate::config::{GameConfig, GameConfigBuilder};
pub use crate::controller::{GameController, GameView};
pub use crate::core::{
    evaluate, Board, Cell, History, HistoryEntry, InvalidMove, Mark, OutOfRange, Outcome,
};
pub use crate::presenter::{render, status_text, DisplayRow, PlayerNames, SortOrder};
