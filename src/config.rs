//! Game configuration.
//!
//! Settings are plain data with defaults. A host application can build them
//! with [`GameConfigBuilder`] or deserialize them from its own config file;
//! missing fields take their defaults.

use crate::core::Mark;
use crate::presenter::SortOrder;
use serde::{Deserialize, Serialize};

/// Name shown for X when the player left theirs blank.
pub const DEFAULT_PLAYER_ONE: &str = "Player 1";

/// Name shown for O when the player left theirs blank.
pub const DEFAULT_PLAYER_TWO: &str = "Player 2";

/// Settings for one game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fallback name for the X player.
    pub player_one_default: String,
    /// Fallback name for the O player.
    pub player_two_default: String,
    /// Move log order when the session starts. Reset always returns to
    /// ascending order.
    pub initial_sort: SortOrder,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one_default: DEFAULT_PLAYER_ONE.to_string(),
            player_two_default: DEFAULT_PLAYER_TWO.to_string(),
            initial_sort: SortOrder::Ascending,
        }
    }
}

impl GameConfig {
    /// Fallback name for the player using `mark`.
    pub fn default_name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.player_one_default,
            Mark::O => &self.player_two_default,
        }
    }
}

/// Builder for [`GameConfig`].
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::config::GameConfigBuilder;
/// use tictactoe_timeline::presenter::SortOrder;
///
/// let config = GameConfigBuilder::new()
///     .player_one_default("Crosses")
///     .initial_sort(SortOrder::Descending)
///     .build();
///
/// assert_eq!(config.player_one_default, "Crosses");
/// assert_eq!(config.player_two_default, "Player 2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct GameConfigBuilder {
    player_one_default: Option<String>,
    player_two_default: Option<String>,
    initial_sort: Option<SortOrder>,
}

impl GameConfigBuilder {
    /// Create a builder with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback name for X.
    pub fn player_one_default(mut self, name: impl Into<String>) -> Self {
        self.player_one_default = Some(name.into());
        self
    }

    /// Set the fallback name for O.
    pub fn player_two_default(mut self, name: impl Into<String>) -> Self {
        self.player_two_default = Some(name.into());
        self
    }

    /// Set the move log order used when the session starts.
    pub fn initial_sort(mut self, order: SortOrder) -> Self {
        self.initial_sort = Some(order);
        self
    }

    /// Build the configuration, filling unset fields with defaults.
    pub fn build(self) -> GameConfig {
        let defaults = GameConfig::default();
        GameConfig {
            player_one_default: self
                .player_one_default
                .unwrap_or(defaults.player_one_default),
            player_two_default: self
                .player_two_default
                .unwrap_or(defaults.player_two_default),
            initial_sort: self.initial_sort.unwrap_or(defaults.initial_sort),
        }
    }
}
