//! HighScoreMiddleware - bridges finished games to the persistent store
//!
//! Listens for the end-of-game signal, compares the final score against the
//! stored best and writes back when it was beaten, then re-dispatches the
//! outcome for the session reducer. Storage failures are logged and degraded
//! to a best of zero; they never reach game state.

use crate::actions::{Action, SessionAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use shark_scores::HighScore;

pub struct HighScoreMiddleware;

impl HighScoreMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for HighScoreMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Session(SessionAction::GameEnded(score)) = action else {
            return true;
        };

        let mut high_score = HighScore::load();
        let new_record = high_score.record(*score);
        if new_record {
            if let Err(err) = high_score.save() {
                log::warn!("Could not save new high score {}: {err:#}", score);
            }
        }

        dispatcher.dispatch(Action::Session(SessionAction::HighScoreLoaded {
            best: high_score.best(),
            new_record,
        }));

        true // GameEnded also reaches the session reducer
    }
}
