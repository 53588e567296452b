//! Root reducer - pure function that produces new state from state + action
//!
//! Gameplay actions are delegated to the pure game reducer in `shark-game`;
//! everything else is handled by the session and splash sub-reducers.

use rand::RngCore;

use crate::actions::{Action, GlobalAction};
use crate::reducers::{session_reducer, splash_reducer};
use crate::state::AppState;

pub fn reduce(mut state: AppState, action: &Action, rng: &mut dyn RngCore) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return state;
        }
        Action::Game(game_action) => {
            state.game = shark_game::reduce(state.game, game_action, rng);
        }
        _ => {}
    }

    state.splash = splash_reducer::reduce(state.splash, action);
    state.session = session_reducer::reduce(state.session, action);

    state
}
