//! KeyboardMiddleware - translates key events into context-aware actions
//!
//! Keys are routed by context:
//! - Ctrl+C, `q` and Esc always quit.
//! - While the splash screen is up, every other key is swallowed (the splash
//!   dismisses itself on a timer).
//! - Enter or Space starts a fresh game, or resets a finished one; `r`
//!   resets at any point; arrows (and hjkl/wasd) move the shark.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shark_game::{Direction, GameAction};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        // Only intercept raw key events
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        if let Some(translated) = translate_key(key, state) {
            log::debug!("Key {:?} -> {:?}", key.code, translated);
            dispatcher.dispatch(translated);
        }

        false // Key events never reach the reducer untranslated
    }
}

/// Map a key event to an action, or `None` when the key means nothing in the
/// current context.
fn translate_key(key: &KeyEvent, state: &AppState) -> Option<Action> {
    // Quit keys always work
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Global(GlobalAction::Quit));
    }
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        return Some(Action::Global(GlobalAction::Quit));
    }

    // The splash screen swallows gameplay keys
    if state.splash.visible {
        return None;
    }

    let game_action = match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => {
            GameAction::Move(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => {
            GameAction::Move(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => {
            GameAction::Move(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => {
            GameAction::Move(Direction::Right)
        }
        KeyCode::Char('r') => GameAction::Reset,
        KeyCode::Enter | KeyCode::Char(' ') => {
            if state.game.is_over() {
                GameAction::Reset
            } else if !state.game.started {
                GameAction::Start
            } else {
                return None;
            }
        }
        _ => return None,
    };

    Some(Action::Game(game_action))
}
