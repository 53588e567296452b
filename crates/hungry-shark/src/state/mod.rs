//! Application state.

mod session;
mod splash;

pub use session::SessionState;
pub use splash::SplashState;

use shark_game::GameState;

/// Root application state, replaced wholesale by the reducer on each action.
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub splash: SplashState,
    pub game: GameState,
    pub session: SessionState,
}

impl AppState {
    pub fn new(game: GameState) -> Self {
        Self {
            running: true,
            splash: SplashState::default(),
            game,
            session: SessionState::default(),
        }
    }
}
