//! Actions represent all possible state changes in the application.
//!
//! The root enum is tagged by scope: global terminal concerns, gameplay
//! actions handled by the pure game reducer, and session bookkeeping around
//! the persistent high score.

use ratatui::crossterm::event::KeyEvent;
use shark_game::GameAction;

/// Application-wide actions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlobalAction {
    /// Raw key event from the terminal, translated by the keyboard middleware
    KeyPressed(KeyEvent),
    /// Advance the splash animation one frame
    SplashTick,
    /// Dismiss the splash screen and show the board
    SplashDone,
    Quit,
}

/// Session bookkeeping around a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// The countdown reached zero with the given final score
    GameEnded(u32),
    /// The persisted best score, after comparing against the final score
    HighScoreLoaded { best: u32, new_record: bool },
}

/// Root action enum - tagged by scope
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Global application actions
    Global(GlobalAction),
    /// Gameplay actions, handled by the pure game reducer
    Game(GameAction),
    /// High-score session actions
    Session(SessionAction),
}
