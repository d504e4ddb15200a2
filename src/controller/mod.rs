//! Imperative shell around the pure core.
//!
//! The controller is the single owner of a game session's mutable state.
//! Front-ends feed it raw intents and draw whatever
//! [`GameController::view`] returns.

mod game;
mod view;

pub use game::GameController;
pub use view::GameView;
