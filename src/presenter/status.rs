//! Status line shown above the board.

use crate::config::GameConfig;
use crate::core::{evaluate, Board, Mark, Outcome};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names typed in by the players. Empty means unset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerNames {
    /// Name of the X player.
    pub x: String,
    /// Name of the O player.
    pub o: String,
}

impl PlayerNames {
    /// Names for X and O. An empty string leaves that name unset.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    /// Raw name entered for `mark`.
    pub fn get(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Replace the name for `mark`.
    pub fn set(&mut self, mark: Mark, name: impl Into<String>) {
        match mark {
            Mark::X => self.x = name.into(),
            Mark::O => self.o = name.into(),
        }
    }

    /// Name to display for `mark`, falling back to the configured default.
    pub fn display_name<'a>(&'a self, mark: Mark, config: &'a GameConfig) -> &'a str {
        let name = self.get(mark);
        if name.is_empty() {
            config.default_name(mark)
        } else {
            name
        }
    }
}

/// Colour class of the status subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusTone {
    /// X player's colour.
    X,
    /// O player's colour.
    O,
    /// Neutral colour for a draw.
    Draw,
}

impl StatusTone {
    /// CSS-style class name for the tone.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::X => "x-color",
            Self::O => "o-color",
            Self::Draw => "draw-color",
        }
    }
}

impl From<Mark> for StatusTone {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Self::X,
            Mark::O => Self::O,
        }
    }
}

/// Status line split into its fixed prefix and highlighted subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    /// "Winner: ", "Result is: " or "Next player: ".
    pub prefix: &'static str,
    /// Player name, or "Draw".
    pub subject: String,
    /// Colour class for `subject`.
    pub tone: StatusTone,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.subject)
    }
}

/// Derive the status for `board` with the given player to move.
pub fn status(board: &Board, x_is_next: bool, names: &PlayerNames, config: &GameConfig) -> Status {
    match evaluate(board) {
        Outcome::Win { mark, .. } => Status {
            prefix: "Winner: ",
            subject: names.display_name(mark, config).to_string(),
            tone: mark.into(),
        },
        Outcome::Draw => Status {
            prefix: "Result is: ",
            subject: "Draw".to_string(),
            tone: StatusTone::Draw,
        },
        Outcome::InProgress => {
            let mark = if x_is_next { Mark::X } else { Mark::O };
            Status {
                prefix: "Next player: ",
                subject: names.display_name(mark, config).to_string(),
                tone: mark.into(),
            }
        }
    }
}

/// Status line text using the default fallback names.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::Board;
/// use tictactoe_timeline::presenter::{status_text, PlayerNames};
///
/// let names = PlayerNames::new("", "Bea");
/// assert_eq!(status_text(&Board::new(), true, &names), "Next player: Player 1");
/// assert_eq!(status_text(&Board::new(), false, &names), "Next player: Bea");
/// ```
pub fn status_text(board: &Board, x_is_next: bool, names: &PlayerNames) -> String {
    status(board, x_is_next, names, &GameConfig::default()).to_string()
}
