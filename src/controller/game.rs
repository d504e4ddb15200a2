//! Game controller that turns user intents into history updates.

use crate::config::GameConfig;
use crate::controller::view::GameView;
use crate::core::{History, HistoryEntry, Mark, Outcome};
use crate::presenter::{render, status, DisplayRow, PlayerNames, SortOrder, Status};
use tracing::{debug, error, instrument};

/// Owns one game session: the history, the move log order and the names.
///
/// Intent handlers never report failure. Rejected moves are ignored, and
/// all derived state is recomputed on read.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::controller::GameController;
///
/// let mut game = GameController::new();
/// game.on_cell_click(4);
/// game.on_cell_click(4); // occupied: ignored
///
/// assert_eq!(game.history().len(), 2);
/// assert_eq!(game.status().to_string(), "Next player: Player 2");
/// ```
#[derive(Debug, Clone)]
pub struct GameController {
    history: History,
    sort: SortOrder,
    names: PlayerNames,
    config: GameConfig,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// Create a controller with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Create a controller with custom settings.
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            history: History::new(),
            sort: config.initial_sort,
            names: PlayerNames::default(),
            config,
        }
    }

    /// Play the next mark at `cell`. Invalid moves are silently ignored.
    #[instrument(skip(self))]
    pub fn on_cell_click(&mut self, cell: usize) {
        if let Err(err) = self.history.apply_move(cell) {
            debug!(%err, "move ignored");
        }
    }

    /// Jump to the history entry behind a clicked move log row.
    ///
    /// # Panics
    ///
    /// In debug builds, if `step` is not a recorded entry. The move log only
    /// offers recorded entries, so this signals a defect in the caller.
    #[instrument(skip(self))]
    pub fn on_history_row_click(&mut self, step: usize) {
        if let Err(err) = self.history.jump_to(step) {
            error!(%err, "move log offered a step outside the history");
            if cfg!(debug_assertions) {
                panic!("history invariant violated: {err}");
            }
        }
    }

    /// Flip the move log order.
    #[instrument(skip(self), fields(sort = ?self.sort))]
    pub fn on_toggle_sort(&mut self) {
        self.sort = self.sort.toggled();
    }

    /// Start a new game. Does nothing when the game has not started.
    ///
    /// The move log goes back to ascending order. Player names are kept.
    #[instrument(skip(self))]
    pub fn on_reset(&mut self) {
        if !self.reset_enabled() {
            debug!("reset ignored at game start");
            return;
        }
        self.history.reset();
        self.sort = SortOrder::Ascending;
    }

    /// Store a player's name as typed. An empty name means unset.
    #[instrument(skip(self, name))]
    pub fn on_player_name_change(&mut self, mark: Mark, name: impl Into<String>) {
        self.names.set(mark, name);
    }

    /// Whether the reset control is active.
    pub fn reset_enabled(&self) -> bool {
        !self.history.is_at_start()
    }

    /// Full move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Entry currently shown on the board.
    pub fn current(&self) -> &HistoryEntry {
        self.history.current()
    }

    /// Current move log order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    /// Names as typed by the players.
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    /// Settings this session was created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Outcome of the board currently shown.
    pub fn outcome(&self) -> Outcome {
        self.history.outcome()
    }

    /// Status line for the board currently shown.
    pub fn status(&self) -> Status {
        status(
            &self.history.current().board,
            self.history.next_mark() == Mark::X,
            &self.names,
            &self.config,
        )
    }

    /// Move log rows in the current sort order.
    pub fn move_log(&self) -> Vec<DisplayRow> {
        render(self.history.entries(), self.history.current_index(), self.sort)
    }

    /// Everything the presentation needs to draw one frame.
    pub fn view(&self) -> GameView {
        GameView {
            board: self.history.current().board,
            winning_line: self.outcome().winning_line(),
            status: self.status(),
            moves: self.move_log(),
            sort: self.sort,
            sort_label: self.sort.toggle_label(),
            sort_hint: self.sort.toggle_hint(),
            reset_enabled: self.reset_enabled(),
        }
    }
}
